use leptos::prelude::*;

use crate::i18n::use_locale;

use super::icons::{CloseIcon, MenuIcon};
use super::language_menu::LanguageMenu;
use super::mobile_menu::{MenuState, MobilePanel};
use super::nav_menu::DesktopNav;

/// Fixed site navigation: logo, desktop dropdown menu, language switcher,
/// call-to-action, and the mobile slide-down panel.
///
/// Owns exactly one piece of state, the panel's [`MenuState`]; the current
/// locale lives in the locale context and is only requested to change.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let i18n = use_locale();
    let menu = RwSignal::new(MenuState::Closed);

    let toggle_label = move || {
        if menu.get().is_open() {
            "Close menu"
        } else {
            "Open menu"
        }
    };

    view! {
        <header class="site-header">
            <nav class="site-nav" aria-label="Main navigation">
                <div class="site-nav__bar">
                    <a href="/" class="site-nav__logo" aria-label="Go to homepage">
                        <img src="/assets/sv2-logo.svg" alt="Stratum V2 logo" width="32" height="32"/>
                    </a>
                    <div class="site-nav__desktop">
                        <DesktopNav />
                    </div>
                    <div class="site-nav__actions">
                        <LanguageMenu />
                        <button class="cta-button">{move || i18n.t("navigation.getStarted")}</button>
                    </div>
                    <button
                        class="site-nav__toggle"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        aria-label=toggle_label
                        on:click=move |_| menu.update(|s| *s = s.toggled())
                    >
                        <Show when=move || menu.get().is_open() fallback=|| view! { <MenuIcon /> }>
                            <CloseIcon />
                        </Show>
                    </button>
                </div>
                <MobilePanel state=menu />
            </nav>
        </header>
    }
}
