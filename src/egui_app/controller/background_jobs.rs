use super::jobs::{HealthCheckResult, JobMessage, PredictionResult};
use super::*;
use crate::egui_app::state::StatusTone;
use crate::prediction_api::HealthCheckError;

impl EguiController {
    pub(super) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };
            if self.shut_down || self.jobs.is_disposed() {
                continue;
            }
            match message {
                JobMessage::HealthChecked(message) => self.handle_health_checked(message),
                JobMessage::Predicted(message) => self.handle_predicted(message),
            }
        }
    }

    fn handle_health_checked(&mut self, message: HealthCheckResult) {
        let previous = self.health.status();
        let failure = message.result.as_ref().err().map(HealthCheckError::to_string);
        if !self.health.apply_result(message.generation, message.result) {
            return;
        }
        let current = self.health.status();
        if current == previous || self.request.outcome().is_pending() {
            return;
        }
        match (current, failure) {
            (HealthStatus::Unhealthy, Some(reason)) => self.set_status(
                format!("Prediction service offline: {reason}"),
                StatusTone::Warning,
            ),
            (HealthStatus::Healthy, _) => {
                self.set_status("Prediction service online", StatusTone::Info)
            }
            _ => {}
        }
    }

    fn handle_predicted(&mut self, message: PredictionResult) {
        let request_id = message.request_id;
        if !self.request.complete(request_id, message.result) {
            tracing::debug!(request_id, "Dropping response for superseded prediction");
            return;
        }
        let status = match self.request.outcome() {
            PredictionOutcome::Succeeded { issue_type } => {
                tracing::info!(request_id, issue_type = %issue_type, "Prediction received");
                let label = crate::telemetry::display_label(issue_type);
                Some((format!("Prediction: {label}"), StatusTone::Info))
            }
            PredictionOutcome::Failed { message } => {
                tracing::warn!(request_id, "Prediction failed: {message}");
                Some((format!("Prediction failed: {message}"), StatusTone::Error))
            }
            PredictionOutcome::Idle | PredictionOutcome::Pending => None,
        };
        if let Some((text, tone)) = status {
            self.set_status(text, tone);
        }
    }
}
