//! # itl - English → Hindi + Odia translator
//!
//! `itl` sends English text to a MyMemory-compatible translation API once per
//! target language and shows the Hindi and Odia results.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument
//! itl "Good morning"
//!
//! # Translate from stdin
//! echo "Hello" | itl
//!
//! # Interactive panel
//! itl panel
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/itl/config.toml`:
//!
//! ```toml
//! [itl]
//! endpoint = "https://api.mymemory.translated.net/get"
//! locale = "en"
//! mode = "sequential"
//! show_errors = false
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Static interface strings per locale.
pub mod locale;

/// Diagnostic log setup.
pub mod logging;

/// Interactive panel mode.
pub mod panel;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translate orchestration and view state.
pub mod session;

/// Translation client for MyMemory-compatible APIs.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
