//! Owns the prediction workflow state and bridges it to the egui renderer.
//!
//! Everything here runs on the UI thread. Network calls are delegated to
//! [`jobs::ControllerJobs`], whose workers report back over a channel that
//! [`EguiController::tick`] drains once per frame.

mod background_jobs;
mod health_probe;
mod jobs;
mod request;


pub use health_probe::{HealthProbe, HealthStatus};
pub use request::{PredictionOutcome, RequestController, SubmitRejection};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::egui_app::state::{FieldInputs, StatusTone, UiState};
use crate::prediction_api::{HttpPredictionApi, PredictionApi};
use crate::telemetry::{FormModel, IssueClassification, NetworkSample, SampleField};

use jobs::ControllerJobs;

/// Poll cadence while a response is outstanding and no repaint hook is set.
const IN_FLIGHT_POLL: Duration = Duration::from_millis(100);

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    form: FormModel,
    health: HealthProbe,
    request: RequestController,
    jobs: ControllerJobs,
    repaint_hooked: bool,
    shut_down: bool,
}

impl EguiController {
    /// Controller talking to the configured HTTP service.
    pub fn new(config: AppConfig) -> Self {
        let api = Arc::new(HttpPredictionApi::from_config(&config));
        Self::with_api(config, api)
    }

    /// Controller using a caller-provided transport.
    pub fn with_api(config: AppConfig, api: Arc<dyn PredictionApi>) -> Self {
        let form = FormModel::default();
        let ui = UiState {
            inputs: FieldInputs::from_sample(form.sample()),
            ..UiState::default()
        };
        Self {
            ui,
            health: HealthProbe::new(config.health_interval),
            config,
            form,
            request: RequestController::default(),
            jobs: ControllerJobs::new(api),
            repaint_hooked: false,
            shut_down: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Start health probing; the first check goes out immediately.
    pub fn start(&mut self, now: Instant) {
        if self.shut_down {
            return;
        }
        tracing::info!(
            base_url = %self.config.api_base_url,
            interval_ms = self.config.health_interval.as_millis() as u64,
            "Starting health probe"
        );
        self.health.start(now);
        self.dispatch_due_health_check(now);
    }

    /// Per-frame work: apply finished jobs, then issue any due health check.
    pub fn tick(&mut self, now: Instant) {
        self.poll_background_jobs();
        self.dispatch_due_health_check(now);
    }

    /// Wake the UI whenever a background job finishes.
    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        if self.shut_down {
            return;
        }
        self.jobs.set_repaint_hook(Arc::new(hook));
        self.repaint_hooked = true;
    }

    /// How long the renderer may sleep before the controller needs another tick.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let probe = if self.health.check_in_flight() {
            None
        } else {
            self.health
                .next_due()
                .map(|due| due.saturating_duration_since(now))
        };
        let busy = self.health.check_in_flight() || self.request.outcome().is_pending();
        let in_flight = (busy && !self.repaint_hooked).then_some(IN_FLIGHT_POLL);
        match (probe, in_flight) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn health_status(&self) -> HealthStatus {
        self.health.status()
    }

    pub fn outcome(&self) -> &PredictionOutcome {
        self.request.outcome()
    }

    pub fn classification(&self) -> Option<IssueClassification> {
        self.request.outcome().classification()
    }

    pub fn is_pending(&self) -> bool {
        self.request.outcome().is_pending()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.shut_down && self.request.can_submit(self.health.status())
    }

    pub fn sample(&self) -> &NetworkSample {
        self.form.sample()
    }

    /// Raw text currently shown for `field`.
    pub fn field_input(&self, field: SampleField) -> &str {
        self.ui.inputs.get(field)
    }

    /// Record an edit from the form.
    pub fn update_field(&mut self, field: SampleField, raw: &str) {
        self.ui.inputs.set(field, raw);
        self.form.update(field, raw);
    }

    /// Send the current sample for prediction.
    ///
    /// Returns `false` without touching any state if the service is offline
    /// or a prediction is already in flight.
    pub fn submit_prediction(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        let request_id = match self.request.begin(self.health.status()) {
            Ok(request_id) => request_id,
            Err(reason) => {
                tracing::debug!(?reason, "Prediction submit ignored");
                return false;
            }
        };
        let sample = self.form.snapshot();
        tracing::info!(
            request_id,
            protocol = %sample.protocol,
            device_type = %sample.device_type,
            "Submitting prediction request"
        );
        self.set_status("Analyzing network data...", StatusTone::Busy);
        self.jobs.begin_prediction(request_id, sample);
        true
    }

    /// Clear a finished result or error from the panel.
    pub fn dismiss_result(&mut self) {
        self.request.dismiss();
    }

    /// Tear down: stop probing and ignore every result still on its way.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.health.stop();
        self.request.abandon();
        self.jobs.dispose();
        tracing::info!("Prediction controller shut down");
    }

    fn dispatch_due_health_check(&mut self, now: Instant) {
        if let Some(generation) = self.health.poll(now) {
            self.jobs.begin_health_check(generation);
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}

impl Drop for EguiController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
