use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::i18n::{use_locale, Locale};
use crate::nav::{NavLinkEntry, NAV_LINKS};

use super::icons::Glyph;
use super::language_menu::LanguageGrid;

/// Open/closed state of the slide-down panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The collapsible panel for the narrow layout. Children of a parented
/// entry stay visible the whole time the panel is open; the open/close
/// fade is CSS only and never gates input.
#[component]
pub fn MobilePanel(state: RwSignal<MenuState>) -> impl IntoView {
    let i18n = use_locale();

    let close = move || state.set(MenuState::Closed);

    view! {
        <div
            id="mobile-menu"
            class=move || {
                if state.get().is_open() {
                    "mobile-panel mobile-panel--open"
                } else {
                    "mobile-panel"
                }
            }
            aria-hidden=move || (!state.get().is_open()).to_string()
        >
            <div class="mobile-panel__links">
                {NAV_LINKS
                    .iter()
                    .map(|&entry| view! { <MobileNavGroup entry=entry state=state /> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="mobile-panel__languages">
                <p id="mobile-language-label" class="mobile-panel__label">
                    {move || i18n.t("navigation.language")}
                </p>
                <LanguageGrid on_select=Callback::new(move |_locale: Locale| close()) />
            </div>
            <button class="cta-button cta-button--block" on:click=move |_| close()>
                {move || i18n.t("navigation.getStarted")}
            </button>
        </div>
    }
}

#[component]
fn MobileNavGroup(entry: NavLinkEntry, state: RwSignal<MenuState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move || entry.is_active(&pathname.get());

    view! {
        <div class="mobile-panel__group">
            <a
                href=entry.path
                class=move || {
                    if is_active() {
                        "mobile-panel__link mobile-panel__link--active"
                    } else {
                        "mobile-panel__link"
                    }
                }
                on:click=move |_| state.set(MenuState::Closed)
            >
                {entry.label}
            </a>
            {entry
                .has_children()
                .then(|| {
                    view! {
                        <div class="mobile-panel__sublinks">
                            {entry
                                .children
                                .iter()
                                .map(|&child| {
                                    let child_active = move || child.is_active(&pathname.get());
                                    view! {
                                        <a
                                            href=child.path
                                            class=move || {
                                                if child_active() {
                                                    "mobile-panel__sublink mobile-panel__sublink--active"
                                                } else {
                                                    "mobile-panel__sublink"
                                                }
                                            }
                                            on:click=move |_| state.set(MenuState::Closed)
                                        >
                                            {child.icon.map(|icon| view! { <Glyph icon=icon /> })}
                                            {child.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_parity() {
        let mut state = MenuState::default();
        for _ in 0..4 {
            state = state.toggled();
        }
        assert_eq!(state, MenuState::Closed);

        state = state.toggled();
        assert_eq!(state, MenuState::Open);
    }

    #[test]
    fn link_activation_closes_open_panel() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(MenuState::Closed);

        state.update(|s| *s = s.toggled());
        assert!(state.get().is_open());

        // Activating the "For Miners" child fires the same close the click
        // handler performs; the anchor itself carries the configured path.
        let miners = NAV_LINKS[1].children[0];
        assert_eq!(miners.path, "/miners");
        state.set(MenuState::Closed);
        assert!(!state.get().is_open());
    }
}
