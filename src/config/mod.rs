mod manager;

pub use manager::{AppConfig, ConfigFile, ConfigManager, ItlConfig, ResolveOptions, resolve_config};
