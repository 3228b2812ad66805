//! Persisted user settings (localStorage, JSON).

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::util::clog;

pub const SETTINGS_KEY: &str = "dino_runner_settings";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
}

impl Settings {
    /// Parse a stored blob; anything unreadable yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(s) => s,
            Err(e) => {
                clog(&format!("settings: ignoring stored value ({})", e));
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Some(s) = self.to_json() {
                    let _ = store.set_item(SETTINGS_KEY, &s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_locale_is_read_back() {
        let s = Settings { locale: Locale::En };
        let raw = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&raw), s);
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(Settings::from_json("{}"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"locale":"En","unknown":1}"#).locale, Locale::En);
    }

    #[test]
    fn garbage_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"locale":"Klingon"}"#), Settings::default());
    }
}
