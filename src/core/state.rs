// Shared parameter namespace.
//
// One instance lives for the whole page lifetime behind an `Rc` and is
// handed by reference to every component that needs current values.
// Initialization fills only fields nobody has set yet, so a second boot
// (e.g. the script loaded twice) never clobbers live values.

use std::cell::Cell;

use super::settings::{Settings, BREATH_DEFAULT, ELEGRA_DEFAULT, REZ_DEFAULT, WIND_DEFAULT};

#[derive(Debug, Default)]
pub struct SharedParams {
    wind: Cell<Option<i32>>,
    breath: Cell<Option<i32>>,
    elegra: Cell<Option<i32>>,
    rez: Cell<Option<i32>>,
}

impl SharedParams {
    /// Seed any still-unset fields from `settings`. Fields already set
    /// this page lifetime are left alone.
    pub fn ensure_initialized(&self, settings: &Settings) {
        if self.wind.get().is_none() {
            self.wind.set(Some(settings.wind));
        }
        if self.breath.get().is_none() {
            self.breath.set(Some(settings.breath));
        }
        if self.elegra.get().is_none() {
            self.elegra.set(Some(settings.elegra));
        }
        if self.rez.get().is_none() {
            self.rez.set(Some(settings.rez));
        }
    }

    /// Overwrite all four fields; used only by the settings panel's
    /// apply flow.
    pub fn apply(&self, settings: &Settings) {
        self.wind.set(Some(settings.wind));
        self.breath.set(Some(settings.breath));
        self.elegra.set(Some(settings.elegra));
        self.rez.set(Some(settings.rez));
    }

    pub fn wind(&self) -> i32 {
        self.wind.get().unwrap_or(WIND_DEFAULT)
    }

    pub fn breath(&self) -> i32 {
        self.breath.get().unwrap_or(BREATH_DEFAULT)
    }

    pub fn elegra(&self) -> i32 {
        self.elegra.get().unwrap_or(ELEGRA_DEFAULT)
    }

    pub fn rez(&self) -> i32 {
        self.rez.get().unwrap_or(REZ_DEFAULT)
    }

    pub fn snapshot(&self) -> Settings {
        Settings {
            wind: self.wind(),
            breath: self.breath(),
            elegra: self.elegra(),
            rez: self.rez(),
        }
    }
}
