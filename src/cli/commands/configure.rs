//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Confirm, Select, Text};

use crate::config::{ConfigFile, ConfigManager, ItlConfig};
use crate::locale::Locale;
use crate::session::Strategy;
use crate::translation::DEFAULT_ENDPOINT;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the saved defaults; otherwise asks for each setting
/// and saves the answers.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        println!(
            "{} {}\n",
            Style::label("Config file:"),
            Style::secondary(manager.config_path().display())
        );
        print_current_defaults(&config);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let endpoint = prompt_endpoint(config.itl.endpoint.as_deref())?;
    let locale = select_locale(config.itl.locale)?;
    let mode = select_mode(config.itl.mode)?;
    let show_errors = Confirm::new("Show translation failures?")
        .with_default(config.itl.show_errors.unwrap_or(false))
        .with_help_message("Failures are always logged; this also prints them")
        .prompt()?;

    config.itl = ItlConfig {
        endpoint,
        locale: Some(locale),
        mode: Some(mode),
        show_errors: Some(show_errors),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config.itl.endpoint.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}       {}",
        Style::label("locale"),
        config.itl.locale.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("mode"),
        config.itl.mode.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("show_errors"),
        config.itl.show_errors.map_or_else(not_set, Style::value)
    );
    println!();
}

/// Returns `None` when the built-in endpoint is kept.
fn prompt_endpoint(current: Option<&str>) -> Result<Option<String>> {
    let endpoint = Text::new("Endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("MyMemory-compatible GET endpoint")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok((endpoint != DEFAULT_ENDPOINT).then(|| endpoint.to_string()))
}

fn select_locale(current: Option<Locale>) -> Result<Locale> {
    let options: Vec<String> = Locale::ALL
        .iter()
        .map(|locale| format!("{} - {}", locale.code(), locale.strings().title))
        .collect();

    let default_index = current
        .and_then(|c| Locale::ALL.iter().position(|l| *l == c))
        .unwrap_or(0);

    let selection = Select::new("Interface locale:", options)
        .with_starting_cursor(default_index)
        .raw_prompt()?;

    Ok(Locale::ALL[selection.index])
}

fn select_mode(current: Option<Strategy>) -> Result<Strategy> {
    const MODES: [(Strategy, &str); 2] = [
        (Strategy::Sequential, "sequential - Hindi, then Odia"),
        (Strategy::Parallel, "parallel - both at once"),
    ];

    let default_index = current
        .and_then(|c| MODES.iter().position(|(mode, _)| *mode == c))
        .unwrap_or(0);

    let selection = Select::new(
        "Request mode:",
        MODES.iter().map(|(_, label)| *label).collect(),
    )
    .with_starting_cursor(default_index)
    .raw_prompt()?;

    Ok(MODES[selection.index].0)
}
