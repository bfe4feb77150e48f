use leptos::prelude::*;

use crate::i18n::{use_locale, Locale};

use super::icons::GlobeIcon;

/// Desktop switcher: globe trigger plus dropdown. Selection requests the
/// locale change and closes the list.
#[component]
pub fn LanguageMenu() -> impl IntoView {
    let i18n = use_locale();
    let (is_open, set_open) = signal(false);

    view! {
        <div class="language-menu">
            <button
                class="language-menu__trigger"
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                aria-label=move || i18n.t("navigation.language")
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <GlobeIcon />
            </button>
            <Show when=move || is_open.get()>
                <ul class="language-menu__list" role="menu">
                    {Locale::ALL
                        .iter()
                        .map(|&locale| {
                            let checked = move || i18n.current() == locale;
                            view! {
                                <li role="none">
                                    <button
                                        role="menuitemradio"
                                        aria-checked=move || checked().to_string()
                                        class=move || {
                                            if checked() {
                                                "language-menu__option language-menu__option--active"
                                            } else {
                                                "language-menu__option"
                                            }
                                        }
                                        on:click=move |_| {
                                            i18n.set_locale(locale);
                                            set_open.set(false);
                                        }
                                    >
                                        {locale.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

/// Mobile switcher: one button per language in a grid. `on_select` fires
/// after the locale change so the caller can close the panel.
#[component]
pub fn LanguageGrid(#[prop(into)] on_select: Callback<Locale>) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <div class="language-grid" role="radiogroup" aria-labelledby="mobile-language-label">
            {Locale::ALL
                .iter()
                .map(|&locale| {
                    let checked = move || i18n.current() == locale;
                    view! {
                        <button
                            role="radio"
                            aria-checked=move || checked().to_string()
                            class=move || {
                                if checked() {
                                    "language-grid__option language-grid__option--active"
                                } else {
                                    "language-grid__option"
                                }
                            }
                            on:click=move |_| {
                                i18n.set_locale(locale);
                                on_select.run(locale);
                            }
                        >
                            {locale.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
