//! egui application modules: shared state, controller, view model, renderer.

/// Intent handling and background submission plumbing.
pub mod controller;
/// Shared state types consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// Pure display derivations.
pub mod view_model;
