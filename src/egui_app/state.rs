//! UI-only state for the egui renderer.

use std::collections::BTreeMap;

use crate::telemetry::{NetworkSample, SampleField};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    pub inputs: FieldInputs,
    /// Whether the "About" section is expanded.
    pub about_open: bool,
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Busy => "Working",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Enter network parameters to predict potential issues".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Raw text of each input widget.
///
/// The form model only keeps normalized values, so partially typed numbers
/// such as `"0."` live here until they parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldInputs {
    values: BTreeMap<SampleField, String>,
}

impl FieldInputs {
    pub fn from_sample(sample: &NetworkSample) -> Self {
        Self {
            values: SampleField::ALL
                .into_iter()
                .map(|field| (field, sample.field_text(field)))
                .collect(),
        }
    }

    pub fn get(&self, field: SampleField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: SampleField, raw: &str) {
        self.values.insert(field, raw.to_string());
    }
}
