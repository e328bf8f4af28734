//! Lifecycle of the single in-flight prediction request.

use crate::prediction_api::{PredictError, PredictionResponse};
use crate::telemetry::{IssueClassification, classify};

use super::health_probe::HealthStatus;

/// State of the prediction panel. Only one exists at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PredictionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded { issue_type: String },
    Failed { message: String },
}

impl PredictionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Display attributes for a successful prediction.
    pub fn classification(&self) -> Option<IssueClassification> {
        match self {
            Self::Succeeded { issue_type } => Some(classify(issue_type)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Why a submission was refused. Refusals are silent no-ops; the UI shows
/// them by disabling the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    ServiceUnhealthy,
    AlreadyPending,
}

/// Gates submissions and tracks which request the outcome belongs to.
#[derive(Debug, Default)]
pub struct RequestController {
    outcome: PredictionOutcome,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl RequestController {
    pub fn outcome(&self) -> &PredictionOutcome {
        &self.outcome
    }

    pub fn gate(&self, health: HealthStatus) -> Result<(), SubmitRejection> {
        if self.outcome.is_pending() {
            return Err(SubmitRejection::AlreadyPending);
        }
        if health == HealthStatus::Unhealthy {
            return Err(SubmitRejection::ServiceUnhealthy);
        }
        Ok(())
    }

    pub fn can_submit(&self, health: HealthStatus) -> bool {
        self.gate(health).is_ok()
    }

    /// Move to `Pending`, dropping any previous result, and return the id the
    /// caller must report the response under.
    pub fn begin(&mut self, health: HealthStatus) -> Result<u64, SubmitRejection> {
        self.gate(health)?;
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.outcome = PredictionOutcome::Pending;
        self.in_flight = Some(request_id);
        Ok(request_id)
    }

    /// Settle request `request_id`. Returns `false` if it is no longer the
    /// request in flight.
    pub fn complete(
        &mut self,
        request_id: u64,
        result: Result<PredictionResponse, PredictError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.outcome = match result {
            Ok(response) => PredictionOutcome::Succeeded {
                issue_type: response.predicted_issue_type,
            },
            Err(err) => PredictionOutcome::Failed {
                message: err.to_string(),
            },
        };
        true
    }

    /// Clear a finished result. Has no effect while a request is pending.
    pub fn dismiss(&mut self) {
        if !self.outcome.is_pending() {
            self.outcome = PredictionOutcome::Idle;
        }
    }

    /// Forget the in-flight request so its response is never applied.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::IssueKind;

    fn success(issue: &str) -> Result<PredictionResponse, PredictError> {
        Ok(PredictionResponse {
            predicted_issue_type: issue.to_string(),
        })
    }

    #[test]
    fn unhealthy_service_blocks_submission() {
        let mut request = RequestController::default();
        assert_eq!(
            request.begin(HealthStatus::Unhealthy),
            Err(SubmitRejection::ServiceUnhealthy)
        );
        assert_eq!(request.outcome(), &PredictionOutcome::Idle);
    }

    #[test]
    fn unknown_health_allows_submission() {
        let mut request = RequestController::default();
        assert!(request.begin(HealthStatus::Unknown).is_ok());
        assert!(request.outcome().is_pending());
    }

    #[test]
    fn pending_request_blocks_resubmission() {
        let mut request = RequestController::default();
        request.begin(HealthStatus::Healthy).unwrap();
        assert_eq!(
            request.begin(HealthStatus::Healthy),
            Err(SubmitRejection::AlreadyPending)
        );
    }

    #[test]
    fn success_classifies_issue() {
        let mut request = RequestController::default();
        let id = request.begin(HealthStatus::Healthy).unwrap();
        assert!(request.complete(id, success("packet_loss")));
        let classification = request.outcome().classification().unwrap();
        assert_eq!(classification.kind, IssueKind::PacketLoss);
        assert_eq!(classification.label, "PACKET LOSS");
        assert_eq!(
            classification.description,
            "Network packets are being dropped during transmission"
        );
    }

    #[test]
    fn failure_keeps_user_facing_message() {
        let mut request = RequestController::default();
        let id = request.begin(HealthStatus::Healthy).unwrap();
        request.complete(id, Err(PredictError::Status(500)));
        assert_eq!(request.outcome().error_message(), Some("HTTP error! status: 500"));
        assert!(request.can_submit(HealthStatus::Healthy));
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut request = RequestController::default();
        let first = request.begin(HealthStatus::Healthy).unwrap();
        request.complete(first, success("none"));
        let second = request.begin(HealthStatus::Healthy).unwrap();
        assert_ne!(first, second);
        assert_eq!(request.outcome(), &PredictionOutcome::Pending);
        assert!(!request.complete(first, success("device_failure")));
        assert_eq!(request.outcome(), &PredictionOutcome::Pending);
    }

    #[test]
    fn abandoned_request_is_never_applied() {
        let mut request = RequestController::default();
        let id = request.begin(HealthStatus::Healthy).unwrap();
        request.abandon();
        assert!(!request.complete(id, success("none")));
    }

    #[test]
    fn dismiss_only_clears_terminal_states() {
        let mut request = RequestController::default();
        let id = request.begin(HealthStatus::Healthy).unwrap();
        request.dismiss();
        assert!(request.outcome().is_pending());
        request.complete(id, Err(PredictError::Transport(String::new())));
        request.dismiss();
        assert_eq!(request.outcome(), &PredictionOutcome::Idle);
    }
}
