/// Page-facing identifiers and tuning values.
///
/// Everything the web layer hard-codes about the host page lives here so
/// the component modules stay free of magic strings.
// Persisted settings blob
pub const SETTINGS_STORAGE_KEY: &str = "windsong.settings.v1";

// Music library
pub const MANIFEST_PATH: &str = "music/tracks.json";
pub const LIBRARY_GLOBAL: &str = "windSongLibrary";
pub const LIBRARY_READY_GLOBAL: &str = "windSongLibraryReady";

// Background environment iframe
pub const IFRAME_ID: &str = "windsong-environment";
pub const IFRAME_SRC: &str = "environment.html";

// Settings panel elements
pub const PANEL_ID: &str = "windsong-panel";
pub const PANEL_LAUNCHER_ID: &str = "windsong-panel-launcher";
pub const INPUT_WIND_ID: &str = "windsong-input-wind";
pub const INPUT_BREATH_ID: &str = "windsong-input-breath";
pub const INPUT_ELEGRA_ID: &str = "windsong-input-elegra";
pub const INPUT_REZ_ID: &str = "windsong-input-rez";

// Host-page anchors, best match first. The "About" trigger positions the
// launcher; the poem output anchors the celebration.
pub const ABOUT_SELECTORS: &[&str] = &["#about", ".about", "button.about"];
pub const PARTY_ANCHOR_SELECTORS: &[&str] = &["#poem-output", ".poem-output", ".poem", ".wrap"];

// Celebration sprite palette; particles cycle through it by index.
pub const PARTY_PALETTE: &[&str] = &[
    "#e5989b", "#ffb4a2", "#ffcdb2", "#b5e48c", "#99d98c", "#76c893",
];
pub const PARTY_GLYPH: &str = "\u{1F98B}";
