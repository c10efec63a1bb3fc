//! egui renderer for the diagnostic form.

/// Palette and shared widget styling.
pub mod style;

use std::time::Duration;

use eframe::egui::{self, RichText, TopBottomPanel, Ui};

use crate::egui_app::controller::FormController;
use crate::egui_app::state::SubmissionLifecycle;
use crate::egui_app::view_model;

/// Smallest sensible window for the two-column measurement grid.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);

const FIELD_COLUMNS: usize = 2;

/// Renders the egui UI using the shared controller state.
pub struct DiagnosticApp {
    controller: FormController,
    visuals_set: bool,
}

impl DiagnosticApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = FormController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load settings: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("status_bar")
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let palette = style::palette();
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(dot.center(), 5.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                    const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                    ui.allocate_ui_with_layout(
                        ui.available_size(),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                        },
                    );
                });
            });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new("Breast Cancer Prediction").color(palette.accent));
        });
        ui.add_space(8.0);

        let pending = self.controller.ui.form.lifecycle.is_pending();
        egui::ScrollArea::vertical()
            .id_salt("measurement_scroll")
            .show(ui, |ui| {
                self.render_measurement_grid(ui, pending);
                ui.add_space(12.0);
                let submit_clicked = ui
                    .vertical_centered(|ui| {
                        let label = if pending { "Predicting…" } else { "Predict" };
                        ui.add_enabled(!pending, egui::Button::new(label))
                            .clicked()
                    })
                    .inner;
                if submit_clicked {
                    self.controller.submit();
                }
                ui.add_space(12.0);
                self.render_outcome(ui);
                ui.add_space(12.0);
            });
    }

    fn render_measurement_grid(&mut self, ui: &mut Ui, pending: bool) {
        let palette = style::palette();
        egui::Grid::new("measurement_grid")
            .num_columns(FIELD_COLUMNS * 2)
            .spacing(egui::vec2(16.0, 6.0))
            .show(ui, |ui| {
                let mut column = 0usize;
                for field in self.controller.ui.form.record.fields_mut() {
                    ui.label(RichText::new(field.label()).color(palette.text_primary));
                    ui.add_enabled(
                        !pending,
                        egui::TextEdit::singleline(&mut field.value).desired_width(120.0),
                    );
                    column += 1;
                    if column % FIELD_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
                if column % FIELD_COLUMNS != 0 {
                    ui.end_row();
                }
            });
    }

    /// Error panel or result panel, never both: the lifecycle is one tagged
    /// value.
    fn render_outcome(&mut self, ui: &mut Ui) {
        match &self.controller.ui.form.lifecycle {
            SubmissionLifecycle::Idle | SubmissionLifecycle::Pending => {}
            SubmissionLifecycle::Failed(message) => {
                render_error_panel(ui, message);
            }
            SubmissionLifecycle::Succeeded(result) => {
                match view_model::prediction_summary(result) {
                    Ok(summary) => render_result_panel(ui, &summary),
                    Err(message) => render_error_panel(ui, &message),
                }
            }
        }
    }
}

fn render_error_panel(ui: &mut Ui, message: &str) {
    let palette = style::palette();
    egui::Frame::default()
        .fill(palette.bg_secondary)
        .stroke(egui::Stroke::new(1.0, palette.danger))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Error:").color(palette.danger).strong());
                ui.label(RichText::new(message).color(palette.text_primary));
            });
        });
}

fn render_result_panel(ui: &mut Ui, summary: &view_model::PredictionSummary) {
    let palette = style::palette();
    let verdict_color = if summary.malignant {
        palette.danger
    } else {
        palette.success
    };
    egui::Frame::default()
        .fill(palette.bg_secondary)
        .stroke(egui::Stroke::new(1.0, palette.success))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.heading(RichText::new("Prediction Result").color(palette.text_primary));
            ui.horizontal(|ui| {
                ui.label(RichText::new("Predicted Class:").color(palette.text_primary));
                ui.label(
                    RichText::new(summary.class_label)
                        .color(verdict_color)
                        .strong(),
                );
            });
            if let Some(breakdown) = &summary.probabilities {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Probability Default: {}", breakdown.default_percent))
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(format!("Probability Repaid: {}", breakdown.repaid_percent))
                        .color(palette.text_primary),
                );
            }
        });
}

impl eframe::App for DiagnosticApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form(ui);
        });
        if self.controller.is_predict_in_progress() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
