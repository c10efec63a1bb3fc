//! Maintains app state and bridges the submission workflow to the egui UI.

mod jobs;

use crate::config::{self, ConfigError, Settings};
use crate::egui_app::state::{SubmissionLifecycle, UiState};
use crate::egui_app::ui::style::StatusTone;
use jobs::{ControllerJobs, JobMessage, PredictJob, PredictResultMessage};

/// Owns the measurement record, the single submission slot and the status
/// line, and exposes the intents the renderer calls into.
pub struct FormController {
    pub ui: UiState,
    settings: Settings,
    jobs: ControllerJobs,
}

impl FormController {
    /// Controller with default settings. Call [`load_configuration`] to pick
    /// up the persisted service address.
    ///
    /// [`load_configuration`]: Self::load_configuration
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Controller bound to explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui: UiState::default(),
            settings,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted settings from disk.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        self.settings = config::load_or_default()?;
        tracing::info!("Prediction service at {}", self.settings.service_url);
        Ok(())
    }

    /// Base URL the controller submits to.
    pub fn service_url(&self) -> &str {
        &self.settings.service_url
    }

    /// Replace the value of one measurement field.
    ///
    /// Touches nothing but that field; the lifecycle is unaffected. `name`
    /// must be one of the fixed keys.
    pub fn update_field(&mut self, name: &str, raw_value: impl Into<String>) {
        self.ui.form.record.set(name, raw_value);
    }

    /// Submit the current record to the prediction service.
    ///
    /// Ignored while a request is already in flight; the single slot is both
    /// the concurrency limit and the ordering guarantee. Otherwise clears the
    /// prior outcome and issues exactly one background request.
    pub fn submit(&mut self) {
        if self.ui.form.lifecycle.is_pending() {
            return;
        }
        let payload = self.ui.form.record.payload();
        self.ui.form.lifecycle = SubmissionLifecycle::Pending;
        self.set_status("Submitting measurements", StatusTone::Busy);
        self.jobs.begin_predict(PredictJob {
            service_url: self.settings.service_url.clone(),
            payload,
        });
    }

    /// Drain finished background work into UI state. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictFinished(message) => self.handle_predict_finished(message),
            }
        }
    }

    /// True while the submission slot is occupied.
    pub fn is_predict_in_progress(&self) -> bool {
        self.jobs.predict_in_progress()
    }

    /// Tear down the controller. Trips the dormant cancel flag so a request
    /// still in flight can never deliver into a dead UI.
    pub fn shutdown(&mut self) {
        self.jobs.cancel_predict();
    }

    fn handle_predict_finished(&mut self, message: PredictResultMessage) {
        self.jobs.clear_predict();
        match message.result {
            Ok(result) => {
                self.set_status("Prediction received", StatusTone::Info);
                self.ui.form.lifecycle = SubmissionLifecycle::Succeeded(result);
            }
            Err(err) => {
                tracing::warn!("Prediction request failed: {err}");
                let display = err.user_message();
                self.set_status(format!("Prediction failed: {display}"), StatusTone::Error);
                self.ui.form.lifecycle = SubmissionLifecycle::Failed(display);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = tone.label().into();
        self.ui.status.badge_color = crate::egui_app::ui::style::status_badge_color(tone);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
