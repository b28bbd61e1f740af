// Settings and their persistence

pub mod config;
pub mod settings;

pub use config::ConfigManager;
pub use settings::EngineSettings;
