//! Configuration management

mod context;
mod settings;

pub use context::AppContext;
pub use settings::SettingsStore;
