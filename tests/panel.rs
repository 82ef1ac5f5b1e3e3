#![allow(clippy::unwrap_used)]
//! Panel line handling: typed lines fire the shortcut, `/translate` is the
//! activation control.

mod common;

use common::ScriptedTranslator;
use itl_cli::config::AppConfig;
use itl_cli::locale::Locale;
use itl_cli::panel::{LineOutcome, PanelSession};
use itl_cli::session::{FailurePolicy, Outcome, Rejection, Strategy, Trigger};
use itl_cli::translation::DEFAULT_ENDPOINT;
use itl_cli::translation::TargetLanguage::{Hindi, Odia};
use reqwest::Url;

fn panel() -> PanelSession<ScriptedTranslator> {
    let config = AppConfig {
        endpoint: Url::parse(DEFAULT_ENDPOINT).unwrap(),
        locale: Locale::En,
        strategy: Strategy::Sequential,
        failure_policy: FailurePolicy::Log,
    };
    let translator = ScriptedTranslator::new()
        .reply(Hindi, "नमस्ते")
        .reply(Odia, "ନମସ୍କାର");
    PanelSession::new(config, translator)
}

#[tokio::test]
async fn test_typed_line_fires_shortcut() {
    let panel = panel();

    let outcome = panel.handle_line("Hello").await;

    assert!(matches!(
        outcome,
        LineOutcome::Triggered(Trigger::Shortcut, Outcome::Translated)
    ));
    let state = panel.state();
    assert_eq!(state.input, "Hello");
    assert_eq!(state.hindi, "नमस्ते");
    assert_eq!(state.odia, "ନମସ୍କାର");
}

#[tokio::test]
async fn test_translate_command_fires_button_on_current_input() {
    let panel = panel();
    panel.handle_line("Hello").await;

    let outcome = panel.handle_line("/translate").await;

    assert!(matches!(
        outcome,
        LineOutcome::Triggered(Trigger::Button, Outcome::Translated)
    ));
    assert_eq!(panel.state().input, "Hello");
}

#[tokio::test]
async fn test_translate_command_without_input_is_ignored() {
    let panel = panel();

    let outcome = panel.handle_line("/translate").await;

    assert!(matches!(
        outcome,
        LineOutcome::Triggered(Trigger::Button, Outcome::Ignored(Rejection::EmptyInput))
    ));
    assert!(panel.state().hindi.is_empty());
}

#[tokio::test]
async fn test_blank_line_fires_shortcut_and_is_rejected() {
    let panel = panel();

    let outcome = panel.handle_line("   ").await;

    assert!(matches!(
        outcome,
        LineOutcome::Triggered(Trigger::Shortcut, Outcome::Ignored(Rejection::EmptyInput))
    ));
}

#[tokio::test]
async fn test_commands_without_translation() {
    let panel = panel();

    assert!(matches!(panel.handle_line("/help").await, LineOutcome::Handled));
    assert!(matches!(panel.handle_line("/show").await, LineOutcome::Handled));
    assert!(matches!(panel.handle_line("/nope").await, LineOutcome::Handled));
    assert!(matches!(panel.handle_line("/quit").await, LineOutcome::Quit));
}
