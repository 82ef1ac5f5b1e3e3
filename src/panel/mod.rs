//! Interactive panel mode.
//!
//! A REPL standing in for the single-page panel: lines typed at the prompt
//! become the input text, slash commands stand in for the other controls.

/// Slash command parsing and autocomplete.
pub mod command;
/// Text rendering of the panel regions.
pub mod render;
mod session;
mod ui;

pub use session::{LineOutcome, PanelSession};
