mod icons;
mod language_menu;
mod mobile_menu;
mod nav_menu;
mod navigation;

pub use icons::Glyph;
pub use language_menu::{LanguageGrid, LanguageMenu};
pub use mobile_menu::{MenuState, MobilePanel};
pub use nav_menu::DesktopNav;
pub use navigation::NavigationBar;
