use serde::{Serialize, Serializer};
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Shape of the free-form timestamp field.
pub const TIMESTAMP_PLACEHOLDER: &str = "YYYY-MM-DD HH:MM:SS";

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Transport protocols offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Tcp, Protocol::Udp, Protocol::Icmp];

    /// Value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
            Self::Icmp => "ICMP",
        }
    }
}

/// Device categories offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    Router,
    Switch,
    Firewall,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Router, DeviceType::Switch, DeviceType::Firewall];

    /// Value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Router => "router",
            Self::Switch => "switch",
            Self::Firewall => "firewall",
        }
    }

    /// Human-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Router => "Router",
            Self::Switch => "Switch",
            Self::Firewall => "Firewall",
        }
    }
}

/// Editable fields of a [`NetworkSample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SampleField {
    Timestamp,
    Protocol,
    SourceIp,
    DestIp,
    PacketSize,
    LatencyMs,
    ErrorRate,
    DeviceType,
}

impl SampleField {
    /// Fields in form order.
    pub const ALL: [SampleField; 8] = [
        SampleField::Timestamp,
        SampleField::Protocol,
        SampleField::SourceIp,
        SampleField::DestIp,
        SampleField::PacketSize,
        SampleField::LatencyMs,
        SampleField::ErrorRate,
        SampleField::DeviceType,
    ];

    /// JSON key used by the prediction endpoint.
    pub fn name(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Protocol => "protocol",
            Self::SourceIp => "source_ip",
            Self::DestIp => "dest_ip",
            Self::PacketSize => "packet_size",
            Self::LatencyMs => "latency_ms",
            Self::ErrorRate => "error_rate",
            Self::DeviceType => "device_type",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Timestamp => "Timestamp",
            Self::Protocol => "Protocol",
            Self::SourceIp => "Source IP Address",
            Self::DestIp => "Destination IP Address",
            Self::PacketSize => "Packet Size (bytes)",
            Self::LatencyMs => "Latency (milliseconds)",
            Self::ErrorRate => "Error Rate (0.0 - 1.0)",
            Self::DeviceType => "Device Type",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Timestamp => "2025-01-01 12:00:00",
            Self::Protocol => "TCP",
            Self::SourceIp => "192.168.1.1",
            Self::DestIp => "8.8.8.8",
            Self::PacketSize => "512",
            Self::LatencyMs => "90.0",
            Self::ErrorRate => "0.2",
            Self::DeviceType => "router",
        }
    }
}

/// One snapshot of network telemetry, serialized verbatim as the `/predict` body.
///
/// `protocol` and `device_type` hold whatever the form produced; the client
/// does not validate them. Numeric fields are always finite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NetworkSample {
    pub timestamp: String,
    pub source_ip: String,
    pub dest_ip: String,
    pub protocol: String,
    #[serde(serialize_with = "serialize_whole_number")]
    pub packet_size: f64,
    pub latency_ms: f64,
    pub error_rate: f64,
    pub device_type: String,
}

impl NetworkSample {
    /// Default form values stamped with `timestamp`.
    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            source_ip: "192.168.1.1".to_string(),
            dest_ip: "8.8.8.8".to_string(),
            protocol: Protocol::Tcp.as_str().to_string(),
            packet_size: 512.0,
            latency_ms: 90.0,
            error_rate: 0.2,
            device_type: DeviceType::Router.as_str().to_string(),
        }
    }

    /// Text shown in the input widget for `field`.
    pub fn field_text(&self, field: SampleField) -> String {
        match field {
            SampleField::Timestamp => self.timestamp.clone(),
            SampleField::Protocol => self.protocol.clone(),
            SampleField::SourceIp => self.source_ip.clone(),
            SampleField::DestIp => self.dest_ip.clone(),
            SampleField::PacketSize => self.packet_size.to_string(),
            SampleField::LatencyMs => self.latency_ms.to_string(),
            SampleField::ErrorRate => self.error_rate.to_string(),
            SampleField::DeviceType => self.device_type.clone(),
        }
    }
}

impl Default for NetworkSample {
    fn default() -> Self {
        Self::with_timestamp(current_timestamp())
    }
}

/// Current UTC time in `YYYY-MM-DD HH:MM:SS` form.
pub fn current_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| TIMESTAMP_PLACEHOLDER.to_string())
}

// Whole values go out as JSON integers so `packet_size` reads as a byte count.
fn serialize_whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_field_names() {
        let sample = NetworkSample::with_timestamp("2025-01-01 12:00:00");
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            value,
            json!({
                "timestamp": "2025-01-01 12:00:00",
                "source_ip": "192.168.1.1",
                "dest_ip": "8.8.8.8",
                "protocol": "TCP",
                "packet_size": 512,
                "latency_ms": 90.0,
                "error_rate": 0.2,
                "device_type": "router"
            })
        );
    }

    #[test]
    fn fractional_packet_size_stays_a_float() {
        let mut sample = NetworkSample::with_timestamp("t");
        sample.packet_size = 512.5;
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["packet_size"], json!(512.5));
    }

    #[test]
    fn field_names_round_trip() {
        for field in SampleField::ALL {
            assert_eq!(SampleField::from_name(field.name()), Some(field));
        }
        assert_eq!(SampleField::from_name("ttl"), None);
    }

    #[test]
    fn timestamp_matches_placeholder_shape() {
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let text = format_timestamp(at);
        assert_eq!(text, "2023-11-14 22:13:20");
        assert_eq!(text.len(), TIMESTAMP_PLACEHOLDER.len());
    }

    #[test]
    fn numeric_field_text_is_compact() {
        let sample = NetworkSample::with_timestamp("t");
        assert_eq!(sample.field_text(SampleField::PacketSize), "512");
        assert_eq!(sample.field_text(SampleField::LatencyMs), "90");
        assert_eq!(sample.field_text(SampleField::ErrorRate), "0.2");
    }
}
