//! Library exports for reuse in the binary and integration tests.
/// Per-user application directories.
pub mod app_dirs;
/// Settings file and environment overrides.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing subscriber setup and log file rotation.
pub mod logging;
/// HTTP client for the prediction service.
pub mod prediction_api;
/// Network sample model and result classification.
pub mod telemetry;
