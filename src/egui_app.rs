//! egui front end: controller, UI state and renderer.

/// Prediction workflow state and background jobs.
pub mod controller;
/// Renderer-facing state.
pub mod state;
/// egui widgets and the eframe app.
pub mod ui;
