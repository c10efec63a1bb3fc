//! Shared state types for the egui UI.

use crate::egui_app::ui::style;
use crate::features::FeatureRecord;
use crate::prediction::PredictionResult;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub form: DiagnosticFormState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: DiagnosticFormState::default(),
        }
    }
}

/// Status badge + text shown in the header bar.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before the first submission.
    pub fn idle() -> Self {
        Self {
            text: "Enter measurements and press Predict".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Editable measurement record plus the single submission slot.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticFormState {
    /// Fixed-key measurement record backing the form inputs.
    pub record: FeatureRecord,
    /// Where the current submission stands. One tagged value, overwritten,
    /// never queued.
    pub lifecycle: SubmissionLifecycle,
}

/// Lifecycle of the controller's single submission slot.
///
/// Collapsing loading/result/error into one tagged value keeps states like
/// "loading with a stale result" unrepresentable.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionLifecycle {
    /// No submission has been issued, or the slot was reset.
    #[default]
    Idle,
    /// Exactly one request is in flight.
    Pending,
    /// The last submission produced a verdict.
    Succeeded(PredictionResult),
    /// The last submission failed; the payload is the display message.
    Failed(String),
}

impl SubmissionLifecycle {
    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The stored verdict, when the last submission succeeded.
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The stored display message, when the last submission failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
