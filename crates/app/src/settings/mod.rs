pub mod state;

pub use state::{MessengerSettings, SettingsError, SettingsStore};
