//! XDG-style path utilities for the configuration directory.
//!
//! `XDG_CONFIG_HOME` is honored on every platform, falling back to
//! `~/.config` rather than the OS-specific location.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "itl";

/// Returns the configuration directory for itl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/itl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/itl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
