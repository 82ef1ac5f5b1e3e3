use std::cell::{Ref, RefCell};
use std::fmt;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::state::{Control, Phase, ViewState};
use crate::translation::{TargetLanguage, TranslationError, Translator};

/// How the per-language calls of one invocation are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hindi first; Odia only once Hindi succeeded. Outputs stored together.
    #[default]
    Sequential,
    /// Both calls at once; each success stored on its own.
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Parallel => f.write_str("parallel"),
        }
    }
}

/// What happens to a failed call besides the diagnostic log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Nothing visible; the view just returns to idle.
    #[default]
    Log,
    /// The message is kept in [`ViewState::last_error`] for display.
    Surface,
}

impl FailurePolicy {
    pub const fn from_show_errors(show_errors: bool) -> Self {
        if show_errors { Self::Surface } else { Self::Log }
    }
}

/// Where a translate action came from. Both go through the same guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The activation control.
    Button,
    /// The keyboard chord pressed while the input has focus.
    Shortcut,
}

/// Why a trigger did not start an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyInput,
    Busy,
}

/// A call that produced no translation.
#[derive(Debug)]
pub struct CallFailure {
    pub target: TargetLanguage,
    pub error: TranslationError,
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} translation failed: {}", self.target.english_name(), self.error)
    }
}

/// Result of one trigger.
#[derive(Debug)]
pub enum Outcome {
    Ignored(Rejection),
    Translated,
    Failed(Vec<CallFailure>),
}

impl Outcome {
    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated)
    }
}

/// Scheduling and failure handling for an [`Orchestrator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrchestratorOptions {
    pub strategy: Strategy,
    pub failure_policy: FailurePolicy,
}

/// Owns the view state and runs translate invocations against a [`Translator`].
///
/// Methods take `&self`: a trigger arriving while another invocation is
/// suspended sees the busy phase and is rejected.
pub struct Orchestrator<T> {
    translator: T,
    options: OrchestratorOptions,
    state: RefCell<ViewState>,
}

/// Puts the view back to idle however the invocation ends.
struct BusyGuard<'a> {
    state: &'a RefCell<ViewState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().phase = Phase::Idle;
    }
}

impl<T: Translator> Orchestrator<T> {
    pub fn new(translator: T, options: OrchestratorOptions) -> Self {
        Self {
            translator,
            options,
            state: RefCell::new(ViewState::default()),
        }
    }

    pub const fn translator(&self) -> &T {
        &self.translator
    }

    /// Borrows the current state. Do not hold across an `.await`.
    pub fn state(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }

    pub fn control(&self) -> Control {
        self.state.borrow().control()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Replaces the input text. Outputs are left alone.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state.borrow_mut().input = text.into();
    }

    /// Runs one translate invocation if the guard allows it.
    pub async fn trigger(&self, trigger: Trigger) -> Outcome {
        let text = {
            let mut state = self.state.borrow_mut();
            if state.is_busy() {
                debug!(?trigger, "translate ignored: already translating");
                return Outcome::Ignored(Rejection::Busy);
            }
            if !state.has_input() {
                debug!(?trigger, "translate ignored: input is blank");
                return Outcome::Ignored(Rejection::EmptyInput);
            }
            state.phase = Phase::Translating;
            state.last_error = None;
            state.input.clone()
        };
        let _busy = BusyGuard { state: &self.state };

        debug!(?trigger, strategy = %self.options.strategy, chars = text.chars().count(), "translating");

        let failures = match self.options.strategy {
            Strategy::Sequential => self.run_sequential(&text).await,
            Strategy::Parallel => self.run_parallel(&text).await,
        };

        if failures.is_empty() {
            debug!("translation finished");
            return Outcome::Translated;
        }

        for failure in &failures {
            error!(
                target_language = failure.target.code(),
                kind = failure.error.kind(),
                error = %failure.error,
                "translation failed"
            );
        }
        if self.options.failure_policy == FailurePolicy::Surface {
            let message = failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            self.state.borrow_mut().last_error = Some(message);
        }

        Outcome::Failed(failures)
    }

    async fn run_sequential(&self, text: &str) -> Vec<CallFailure> {
        let mut translations = Vec::with_capacity(TargetLanguage::ALL.len());

        for target in TargetLanguage::ALL {
            match self.translator.translate(text, target).await {
                Ok(translated) => translations.push((target, translated)),
                Err(error) => return vec![CallFailure { target, error }],
            }
        }

        let mut state = self.state.borrow_mut();
        for (target, translated) in translations {
            state.set_output(target, translated);
        }
        Vec::new()
    }

    async fn run_parallel(&self, text: &str) -> Vec<CallFailure> {
        let results = join_all(TargetLanguage::ALL.map(move |target| async move {
            (target, self.translator.translate(text, target).await)
        }))
        .await;

        let mut failures = Vec::new();
        let mut state = self.state.borrow_mut();
        for (target, result) in results {
            match result {
                Ok(translated) => state.set_output(target, translated),
                Err(error) => failures.push(CallFailure { target, error }),
            }
        }
        failures
    }
}
