//! Localization collaborator: current locale plus translation lookup.
//!
//! Components read the locale reactively and request changes through
//! [`LocaleContext::set_locale`]. Translation tables are embedded JSON, one
//! file per supported language.

use std::collections::HashMap;
use std::str::FromStr;

use leptos::prelude::*;

use crate::error::LocaleParseError;

type Translations = HashMap<String, String>;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Zh,
}

impl Locale {
    /// Fixed switcher contents, in display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Zh => "zh",
        }
    }

    /// Native-script display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Zh => "中文",
        }
    }

    fn table_source(self) -> &'static str {
        match self {
            Self::En => include_str!("translations/en.json"),
            Self::Ru => include_str!("translations/ru.json"),
            Self::Zh => include_str!("translations/zh.json"),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Accepts bare codes (`ru`) and BCP-47-style tags (`ru-RU`) by their
    /// primary subtag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or(s);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "zh" => Ok(Self::Zh),
            _ => Err(LocaleParseError(s.to_string())),
        }
    }
}

fn load_translations(locale: Locale) -> Translations {
    serde_json::from_str(locale.table_source()).unwrap_or_default()
}

/// Reactive locale state, provided once near the app root.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
    translations: RwSignal<Translations>,
}

impl LocaleContext {
    fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
            translations: RwSignal::new(load_translations(locale)),
        }
    }

    /// Look up a translation key, falling back to the key itself when the
    /// table has no entry for it.
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|table| table.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    /// Request a language change. Fire-and-forget: the locale and table
    /// signals update and dependents re-render.
    pub fn set_locale(&self, locale: Locale) {
        self.translations.set(load_translations(locale));
        self.locale.set(locale);
    }

    pub fn current(&self) -> Locale {
        self.locale.get()
    }
}

/// Install the locale context. In the browser the initial language comes
/// from `navigator.language`; on the server it is English.
pub fn provide_locale() {
    provide_context(LocaleContext::new(initial_locale()));
}

pub fn use_locale() -> LocaleContext {
    expect_context::<LocaleContext>()
}

#[cfg(target_arch = "wasm32")]
fn initial_locale() -> Locale {
    use leptos::wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(
        inline_js = "export function browser_language() { return navigator.language || 'en'; }"
    )]
    extern "C" {
        fn browser_language() -> String;
    }

    browser_language().parse().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_locale() -> Locale {
    Locale::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh_CN".parse::<Locale>().unwrap(), Locale::Zh);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "tlh".parse::<Locale>().unwrap_err();
        assert_eq!(err, LocaleParseError("tlh".to_string()));
    }

    #[test]
    fn switcher_lists_exactly_three_languages() {
        assert_eq!(Locale::ALL.len(), 3);
        let codes: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "ru", "zh"]);
    }

    #[test]
    fn every_table_parses_with_navigation_keys() {
        for locale in Locale::ALL {
            let table = load_translations(locale);
            assert!(!table.is_empty(), "{} table is empty", locale.code());
            assert!(table.contains_key("navigation.language"));
            assert!(table.contains_key("navigation.getStarted"));
        }
    }

    #[test]
    fn lookup_falls_back_to_key() {
        let owner = Owner::new();
        owner.set();
        let ctx = LocaleContext::new(Locale::En);
        assert_eq!(ctx.t("navigation.getStarted"), "Get Started");
        assert_eq!(ctx.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn set_locale_requests_exactly_the_selected_code() {
        let owner = Owner::new();
        owner.set();
        let ctx = LocaleContext::new(Locale::En);
        ctx.set_locale(Locale::Zh);
        assert_eq!(ctx.current(), Locale::Zh);
        assert_eq!(ctx.current().code(), "zh");
        assert_eq!(ctx.t("navigation.language"), "语言");
    }
}
