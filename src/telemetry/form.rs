use super::sample::{NetworkSample, SampleField};

/// Holds the sample being edited and normalizes each field as it changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormModel {
    sample: NetworkSample,
}

impl FormModel {
    pub fn new(sample: NetworkSample) -> Self {
        Self { sample }
    }

    pub fn sample(&self) -> &NetworkSample {
        &self.sample
    }

    /// Copy of the current record, taken at submission time.
    pub fn snapshot(&self) -> NetworkSample {
        self.sample.clone()
    }

    /// Apply a raw edit to `field`.
    ///
    /// Numeric fields go through [`parse_numeric`]; text fields keep `raw`
    /// exactly as typed.
    pub fn update(&mut self, field: SampleField, raw: &str) -> &NetworkSample {
        let sample = &mut self.sample;
        match field {
            SampleField::Timestamp => sample.timestamp = raw.to_string(),
            SampleField::Protocol => sample.protocol = raw.to_string(),
            SampleField::SourceIp => sample.source_ip = raw.to_string(),
            SampleField::DestIp => sample.dest_ip = raw.to_string(),
            SampleField::DeviceType => sample.device_type = raw.to_string(),
            SampleField::PacketSize => sample.packet_size = parse_numeric(raw),
            SampleField::LatencyMs => sample.latency_ms = parse_numeric(raw),
            SampleField::ErrorRate => sample.error_rate = parse_numeric(raw),
        }
        &self.sample
    }

    /// Apply an edit addressed by wire name; unknown names are ignored.
    pub fn update_named(&mut self, name: &str, raw: &str) -> Option<&NetworkSample> {
        let field = SampleField::from_name(name)?;
        Some(self.update(field, raw))
    }
}

/// Parse a numeric input, falling back to `0` for anything that is not a finite number.
pub fn parse_numeric(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        // Also folds -0 into 0.
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}
