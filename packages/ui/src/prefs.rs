//! Persisted UI preferences: admin theme, locale, sidebar collapse.
//!
//! Each mutation writes through to `localStorage` so the preference
//! survives page loads; [`apply_theme`] reflects the theme onto the
//! document element for the stylesheet to pick up.

use dioxus::prelude::*;

const THEME_KEY: &str = "theme";
const LOCALE_KEY: &str = "locale";
const COLLAPSED_KEY: &str = "sidebar_collapsed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prefs {
    pub theme: Theme,
    pub locale: String,
    pub collapsed: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            locale: "zh-CN".to_owned(),
            collapsed: false,
        }
    }
}

pub fn use_prefs() -> Signal<Prefs> {
    use_context()
}

/// Provides the preference signal, restored from storage, and applies the
/// restored theme once on mount.
#[component]
pub fn PrefsProvider(children: Element) -> Element {
    let prefs = use_context_provider(|| Signal::new(load_prefs()));

    use_effect(move || {
        apply_theme(prefs.peek().theme);
    });

    rsx! {
        {children}
    }
}

pub fn load_prefs() -> Prefs {
    let mut prefs = Prefs::default();
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(Some(value)) = storage.get_item(THEME_KEY) {
                if let Some(theme) = Theme::parse(&value) {
                    prefs.theme = theme;
                }
            }
            if let Ok(Some(value)) = storage.get_item(LOCALE_KEY) {
                prefs.locale = value;
            }
            if let Ok(Some(value)) = storage.get_item(COLLAPSED_KEY) {
                prefs.collapsed = value == "true";
            }
        }
    }
    prefs
}

pub fn set_theme(mut prefs: Signal<Prefs>, theme: Theme) {
    prefs.write().theme = theme;
    persist(THEME_KEY, theme.as_str());
    apply_theme(theme);
}

pub fn set_locale(mut prefs: Signal<Prefs>, locale: &str) {
    prefs.write().locale = locale.to_owned();
    persist(LOCALE_KEY, locale);
}

pub fn toggle_collapsed(mut prefs: Signal<Prefs>) {
    let collapsed = {
        let mut state = prefs.write();
        state.collapsed = !state.collapsed;
        state.collapsed
    };
    persist(COLLAPSED_KEY, if collapsed { "true" } else { "false" });
}

/// Reflect the theme onto `<html data-theme="...">`.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn persist(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_key: &str, _value: &str) {}
