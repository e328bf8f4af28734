//! Network telemetry samples, form editing and prediction classification.

mod classify;
mod form;
mod sample;

pub use classify::{IssueClassification, IssueIcon, IssueKind, IssueTone, classify, display_label};
pub use form::{FormModel, parse_numeric};
pub use sample::{
    DeviceType, NetworkSample, Protocol, SampleField, TIMESTAMP_PLACEHOLDER, current_timestamp,
    format_timestamp,
};
