//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive panel command handler.
pub mod panel;

/// One-shot translation command handler.
pub mod translate;

use anyhow::Result;

use crate::config::{AppConfig, ConfigManager, ResolveOptions, resolve_config};

/// Merges CLI options with the saved config file.
fn load_app_config(options: &ResolveOptions) -> Result<AppConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
