//! Periodic liveness tracking for the prediction service.

use std::time::{Duration, Instant};

use crate::prediction_api::HealthCheckError;

/// Last known reachability of the prediction service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    /// No check has completed yet.
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Healthy => "Online",
            Self::Unhealthy => "Offline",
        }
    }
}

/// Schedules liveness checks and folds their results into a [`HealthStatus`].
///
/// The probe does no I/O itself. [`HealthProbe::poll`] hands out a generation
/// number whenever a check is due; the caller runs the check and reports back
/// through [`HealthProbe::apply_result`]. Only the latest generation is
/// applied, and nothing is applied once the probe has been stopped.
/// A new check is never issued while the previous one is outstanding.
#[derive(Debug)]
pub struct HealthProbe {
    status: HealthStatus,
    interval: Duration,
    next_due: Option<Instant>,
    generation: u64,
    in_flight: Option<u64>,
    running: bool,
}

impl HealthProbe {
    pub fn new(interval: Duration) -> Self {
        Self {
            status: HealthStatus::Unknown,
            interval,
            next_due: None,
            generation: 0,
            in_flight: None,
            running: false,
        }
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn check_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// When the next check should be issued, if the probe is running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Begin probing; the first check is due immediately.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_due = Some(now);
    }

    /// Return the generation of a new check if one is due at `now`.
    ///
    /// At most one check is in flight; an overdue check is issued on the
    /// first poll after the previous one reports back.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        if !self.running || self.in_flight.is_some() {
            return None;
        }
        let due = self.next_due?;
        if now < due {
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.next_due = Some(now + self.interval);
        Some(self.generation)
    }

    /// Fold a finished check into the status. Returns `false` when the result
    /// was dropped because it is stale or the probe has stopped.
    pub fn apply_result(&mut self, generation: u64, result: Result<(), HealthCheckError>) -> bool {
        if !self.running || self.in_flight != Some(generation) {
            tracing::debug!(generation, "Dropping stale health check result");
            return false;
        }
        self.in_flight = None;
        let next = match result {
            Ok(()) => HealthStatus::Healthy,
            Err(err) => {
                tracing::warn!("Health check failed: {err}");
                HealthStatus::Unhealthy
            }
        };
        if next != self.status {
            tracing::info!(from = ?self.status, to = ?next, "Prediction service health changed");
        }
        self.status = next;
        true
    }

    /// Cancel the schedule. Later results are ignored; the status is kept.
    pub fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
        self.in_flight = None;
    }
}
