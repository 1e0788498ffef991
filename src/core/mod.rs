pub mod library;
pub mod party;
pub mod schedule;
pub mod settings;
pub mod state;

pub use settings::Settings;
pub use state::SharedParams;
