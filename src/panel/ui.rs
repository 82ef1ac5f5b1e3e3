//! Panel mode messages.

use crate::config::AppConfig;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner(config: &AppConfig) {
    let strings = config.strings();
    println!(
        "{} {}",
        Style::header(strings.title),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(strings.subtitle));
    println!("{}", Style::hint(strings.shortcut_hint));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &AppConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}       {}",
        Style::label("locale"),
        Style::value(config.locale)
    );
    println!(
        "  {}         {}",
        Style::label("mode"),
        Style::value(config.strategy)
    );
    println!(
        "  {}  {}",
        Style::label("show_errors"),
        Style::value(config.failure_policy == crate::session::FailurePolicy::Surface)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("<text>    "),
        Style::secondary("Replace the input and translate it")
    );
    println!(
        "  {}  {}",
        Style::command("/translate"),
        Style::secondary("Translate the current input again")
    );
    println!(
        "  {}  {}",
        Style::command("/show     "),
        Style::secondary("Show the whole panel")
    );
    println!(
        "  {}  {}",
        Style::command("/config   "),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}  {}",
        Style::command("/help     "),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/quit     "),
        Style::secondary("Exit the panel")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
