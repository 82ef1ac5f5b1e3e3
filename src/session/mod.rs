//! Translate orchestration and the view state it drives.
//!
//! One [`Orchestrator`] owns the input, both outputs and the busy phase. A
//! trigger moves it from idle to translating, calls the [`Translator`] once
//! per target language, and always returns it to idle.
//!
//! [`Translator`]: crate::translation::Translator

mod orchestrator;
mod state;

pub use orchestrator::{
    CallFailure, FailurePolicy, Orchestrator, OrchestratorOptions, Outcome, Rejection, Strategy,
    Trigger,
};
pub use state::{Control, Phase, ViewState};
