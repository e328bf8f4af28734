use crate::prediction_api::{HealthCheckError, PredictError, PredictionApi, PredictionResponse};
use crate::telemetry::NetworkSample;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{Receiver, Sender},
};
use std::thread;

type TryRecvError = std::sync::mpsc::TryRecvError;

/// Called after a worker posts a message so the UI wakes up to drain it.
pub(crate) type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub(crate) enum JobMessage {
    HealthChecked(HealthCheckResult),
    Predicted(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) generation: u64,
    pub(crate) result: Result<(), HealthCheckError>,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResponse, PredictError>,
}

/// Runs blocking service calls off the UI thread and funnels their results
/// back through a single channel.
pub(crate) struct ControllerJobs {
    api: Arc<dyn PredictionApi>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    disposed: Arc<AtomicBool>,
    repaint: Option<RepaintHook>,
}

impl ControllerJobs {
    pub(super) fn new(api: Arc<dyn PredictionApi>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            api,
            message_tx,
            message_rx,
            disposed: Arc::new(AtomicBool::new(false)),
            repaint: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub(super) fn begin_health_check(&self, generation: u64) {
        self.spawn(move |api| {
            JobMessage::HealthChecked(HealthCheckResult {
                generation,
                result: api.check_health(),
            })
        });
    }

    pub(super) fn begin_prediction(&self, request_id: u64, sample: NetworkSample) {
        self.spawn(move |api| {
            JobMessage::Predicted(PredictionResult {
                request_id,
                result: api.predict(&sample),
            })
        });
    }

    /// Stop delivering results. Workers already running finish their call and
    /// discard the outcome.
    pub(super) fn dispose(&mut self) {
        self.disposed.store(true, Ordering::Release);
        self.repaint = None;
    }

    pub(super) fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn PredictionApi) -> JobMessage + Send + 'static,
    {
        if self.is_disposed() {
            return;
        }
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        let disposed = Arc::clone(&self.disposed);
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let message = job(api.as_ref());
            if disposed.load(Ordering::Acquire) {
                return;
            }
            if tx.send(message).is_ok() {
                if let Some(repaint) = repaint {
                    repaint();
                }
            }
        });
    }
}
