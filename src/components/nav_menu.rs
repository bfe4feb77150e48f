use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::{ChildLinkEntry, NavLinkEntry, NAV_LINKS};

use super::icons::{ChevronRightIcon, Glyph};

/// Horizontal menu for the wide layout. The widget owns which submenu is
/// open, so at most one dropdown shows at a time.
#[component]
pub fn DesktopNav() -> impl IntoView {
    let (open_submenu, set_open_submenu) = signal(None::<&'static str>);

    view! {
        <ul class="nav-menu">
            {NAV_LINKS
                .iter()
                .map(|&entry| {
                    view! {
                        <DesktopNavItem
                            entry=entry
                            open_submenu=open_submenu
                            set_open_submenu=set_open_submenu
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn DesktopNavItem(
    entry: NavLinkEntry,
    open_submenu: ReadSignal<Option<&'static str>>,
    set_open_submenu: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let pathname = use_location().pathname;

    if entry.has_children() {
        let is_open = move || open_submenu.get() == Some(entry.path);

        view! {
            <li
                class="nav-menu__item"
                on:pointerenter=move |_| set_open_submenu.set(Some(entry.path))
                on:pointerleave=move |_| {
                    set_open_submenu
                        .update(|open| {
                            if *open == Some(entry.path) {
                                *open = None;
                            }
                        });
                }
            >
                <button
                    class=move || {
                        if is_open() {
                            "nav-menu__trigger nav-menu__trigger--open"
                        } else {
                            "nav-menu__trigger"
                        }
                    }
                    aria-haspopup="true"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| {
                        set_open_submenu
                            .update(|open| {
                                *open = if *open == Some(entry.path) {
                                    None
                                } else {
                                    Some(entry.path)
                                };
                            });
                    }
                >
                    {entry.label}
                </button>
                <Show when=is_open>
                    <ul class="nav-menu__submenu">
                        {entry
                            .children
                            .iter()
                            .map(|&child| {
                                view! { <SubmenuLink child=child set_open_submenu=set_open_submenu /> }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Show>
            </li>
        }
        .into_any()
    } else {
        let is_active = move || entry.is_active(&pathname.get());

        view! {
            <li class="nav-menu__item">
                <a
                    href=entry.path
                    class=move || {
                        if is_active() {
                            "nav-menu__link nav-menu__link--active"
                        } else {
                            "nav-menu__link"
                        }
                    }
                >
                    {entry.label}
                </a>
            </li>
        }
        .into_any()
    }
}

#[component]
fn SubmenuLink(
    child: ChildLinkEntry,
    set_open_submenu: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <li class="nav-menu__subitem">
            <a href=child.path class="nav-menu__sublink" on:click=move |_| set_open_submenu.set(None)>
                <span class="nav-menu__sublink-body">
                    {child.icon.map(|icon| view! { <Glyph icon=icon /> })}
                    <span class="nav-menu__sublink-label">{child.label}</span>
                </span>
                <span class="nav-menu__sublink-chevron" aria-hidden="true">
                    <ChevronRightIcon />
                </span>
            </a>
        </li>
    }
}
