use anyhow::{Result, bail};
use tracing::debug;

use super::load_app_config;
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::panel::render::render_outputs;
use crate::session::{FailurePolicy, Orchestrator, Outcome, Rejection, Trigger};
use crate::translation::MyMemoryClient;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub resolve: ResolveOptions,
}

/// Translates one input and prints both outputs.
///
/// Blank input does nothing. A failed call is logged; the command only fails
/// when errors are configured to be shown.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_app_config(&options.resolve)?;
    let strings = config.strings();

    let source_text = InputReader::read(options.text.as_deref(), options.file.as_deref())?;
    debug!(endpoint = %config.endpoint, locale = %config.locale, "resolved configuration");

    let client = MyMemoryClient::new(config.endpoint.clone());
    let orchestrator = Orchestrator::new(client, config.orchestrator_options());
    orchestrator.set_input(source_text);

    let outcome = {
        let _spinner = orchestrator
            .control()
            .is_enabled()
            .then(|| Spinner::new(strings.translating));
        orchestrator.trigger(Trigger::Button).await
    };

    let state = orchestrator.state();
    match outcome {
        Outcome::Translated => {
            print!("{}", render_outputs(&state, strings));
        }
        Outcome::Ignored(Rejection::EmptyInput) => {
            eprintln!("{}", Style::hint("Nothing to translate: input is empty"));
        }
        Outcome::Ignored(Rejection::Busy) => {}
        Outcome::Failed(_) if config.failure_policy == FailurePolicy::Surface => {
            let message = state.last_error.clone().unwrap_or_default();
            bail!(message);
        }
        Outcome::Failed(_) => {}
    }

    Ok(())
}
