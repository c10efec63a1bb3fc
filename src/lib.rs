//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// The fixed diagnostic measurement record.
pub mod features;
/// Shared HTTP agent configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Prediction service client.
pub mod prediction;
