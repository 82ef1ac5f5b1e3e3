//! View state owned by the orchestrator.

use crate::translation::TargetLanguage;

/// Whether a translate invocation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Translating,
}

/// What the activation control looks like right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Clickable with its normal label.
    Enabled,
    /// Greyed out because the input is blank.
    Disabled,
    /// Greyed out with a busy indicator in place of the label.
    Busy,
}

impl Control {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Input, the two outputs, and the busy phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub input: String,
    pub hindi: String,
    pub odia: String,
    pub phase: Phase,
    /// Message of the last failed invocation, kept only when failures are surfaced.
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Translating
    }

    pub fn has_input(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn control(&self) -> Control {
        if self.is_busy() {
            Control::Busy
        } else if self.has_input() {
            Control::Enabled
        } else {
            Control::Disabled
        }
    }

    pub fn output(&self, target: TargetLanguage) -> &str {
        match target {
            TargetLanguage::Hindi => &self.hindi,
            TargetLanguage::Odia => &self.odia,
        }
    }

    pub(super) fn set_output(&mut self, target: TargetLanguage, text: String) {
        match target {
            TargetLanguage::Hindi => self.hindi = text,
            TargetLanguage::Odia => self.odia = text,
        }
    }
}
