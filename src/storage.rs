//! Settings Store over `window.localStorage`.
//!
//! Loading never fails: a missing storage area, absent key, or corrupt
//! blob silently resolves to defaults. Saving is best-effort (quota or
//! privacy-mode failures are dropped).

use web_sys as web;

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::core::Settings;

pub struct SettingsStore {
    storage: Option<web::Storage>,
}

impl SettingsStore {
    pub fn new(window: &web::Window) -> Self {
        SettingsStore {
            storage: window.local_storage().ok().flatten(),
        }
    }

    pub fn load(&self) -> Settings {
        let Some(storage) = &self.storage else {
            return Settings::default();
        };
        match storage.get_item(SETTINGS_STORAGE_KEY) {
            Ok(Some(text)) => Settings::from_json(&text),
            _ => Settings::default(),
        }
    }

    pub fn save(&self, settings: &Settings) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(SETTINGS_STORAGE_KEY, &settings.to_json());
        }
    }
}
