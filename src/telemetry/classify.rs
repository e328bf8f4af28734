/// Issue categories the prediction service reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    DeviceFailure,
    PacketLoss,
    LatencySpike,
    /// The service's `none` verdict: nothing wrong.
    Nominal,
    /// Any token the client does not know.
    Unrecognized,
}

impl IssueKind {
    /// Case-insensitive token lookup.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "device_failure" => Self::DeviceFailure,
            "packet_loss" => Self::PacketLoss,
            "latency_spike" => Self::LatencySpike,
            "none" => Self::Nominal,
            _ => Self::Unrecognized,
        }
    }

    fn tone(self) -> IssueTone {
        match self {
            Self::DeviceFailure => IssueTone::Critical,
            Self::PacketLoss => IssueTone::Warning,
            Self::LatencySpike => IssueTone::Elevated,
            Self::Nominal => IssueTone::Nominal,
            Self::Unrecognized => IssueTone::Neutral,
        }
    }

    fn icon(self) -> IssueIcon {
        match self {
            Self::DeviceFailure | Self::PacketLoss | Self::LatencySpike => IssueIcon::Alert,
            Self::Nominal => IssueIcon::Check,
            Self::Unrecognized => IssueIcon::Activity,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::DeviceFailure => "Critical hardware or device malfunction detected",
            Self::PacketLoss => "Network packets are being dropped during transmission",
            Self::LatencySpike => "Unusual delay in network response times detected",
            Self::Nominal => "Network is operating within normal parameters",
            Self::Unrecognized => "Unknown prediction result",
        }
    }
}

/// Color family used to render a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueTone {
    Critical,
    Warning,
    Elevated,
    Nominal,
    Neutral,
}

impl IssueTone {
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "yellow",
            Self::Elevated => "orange",
            Self::Nominal => "green",
            Self::Neutral => "blue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueIcon {
    Alert,
    Check,
    Activity,
}

impl IssueIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Alert => "⚠",
            Self::Check => "✔",
            Self::Activity => "ℹ",
        }
    }
}

/// Display attributes derived from an issue-type token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueClassification {
    pub kind: IssueKind,
    pub label: String,
    pub tone: IssueTone,
    pub icon: IssueIcon,
    pub description: &'static str,
}

impl IssueClassification {
    pub fn color_class(&self) -> &'static str {
        self.tone.color_class()
    }
}

/// Map a returned issue type to its display attributes.
pub fn classify(issue_type: &str) -> IssueClassification {
    let kind = IssueKind::from_token(issue_type);
    IssueClassification {
        kind,
        label: display_label(issue_type),
        tone: kind.tone(),
        icon: kind.icon(),
        description: kind.description(),
    }
}

/// `packet_loss` -> `PACKET LOSS`.
///
/// Every underscore becomes a space, so `a_b_c` reads `A B C` rather than
/// keeping the later underscores.
pub fn display_label(issue_type: &str) -> String {
    issue_type.replace('_', " ").to_uppercase()
}
