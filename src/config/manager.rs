use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::locale::{Locale, Strings};
use crate::paths;
use crate::session::{FailurePolicy, OrchestratorOptions, Strategy};
use crate::translation::DEFAULT_ENDPOINT;

/// Default settings in the `[itl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItlConfig {
    /// Translation API endpoint.
    pub endpoint: Option<String>,
    /// Interface locale of the static strings.
    pub locale: Option<Locale>,
    /// Whether the per-language calls run one after another or together.
    pub mode: Option<Strategy>,
    /// Show translation failures instead of only logging them.
    pub show_errors: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/itl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub itl: ItlConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub locale: Option<Locale>,
    /// `true` forces parallel mode; `false` defers to the config file.
    pub parallel: bool,
    /// `true` forces surfaced errors; `false` defers to the config file.
    pub show_errors: bool,
}

/// Configuration resolved once at startup and passed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: Url,
    pub locale: Locale,
    pub strategy: Strategy,
    pub failure_policy: FailurePolicy,
}

impl AppConfig {
    pub const fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    pub const fn orchestrator_options(&self) -> OrchestratorOptions {
        OrchestratorOptions {
            strategy: self.strategy,
            failure_policy: self.failure_policy,
        }
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the resolved endpoint is not an absolute http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<AppConfig> {
    let endpoint = options
        .endpoint
        .as_deref()
        .or(config_file.itl.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT);

    let endpoint = Url::parse(endpoint).with_context(|| {
        format!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Please provide an absolute URL via:\n  \
             - CLI option: itl --endpoint <url>\n  \
             - Config file: ~/.config/itl/config.toml"
        )
    })?;

    if !matches!(endpoint.scheme(), "http" | "https") {
        anyhow::bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Only http and https endpoints are supported."
        );
    }

    let locale = options
        .locale
        .or(config_file.itl.locale)
        .unwrap_or_default();

    let strategy = if options.parallel {
        Strategy::Parallel
    } else {
        config_file.itl.mode.unwrap_or_default()
    };

    let show_errors = options.show_errors || config_file.itl.show_errors.unwrap_or(false);

    Ok(AppConfig {
        endpoint,
        locale,
        strategy,
        failure_policy: FailurePolicy::from_show_errors(show_errors),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/itl/config.toml`
    /// or `~/.config/itl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
