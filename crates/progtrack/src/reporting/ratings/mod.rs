use serde::{Deserialize, Serialize};

/// The seven rating categories used throughout the oversight dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingKey {
    OnTrack,
    OnTrackYearly,
    TargetAchieved,
    Delayed,
    SevereDelay,
    Completed,
    NotStarted,
}

/// Badge styling bucket a rating renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityClass {
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
}

impl SeverityClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl RatingKey {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::OnTrack,
            Self::OnTrackYearly,
            Self::TargetAchieved,
            Self::Delayed,
            Self::SevereDelay,
            Self::Completed,
            Self::NotStarted,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::OnTrackYearly => "on-track-yearly",
            Self::TargetAchieved => "target-achieved",
            Self::Delayed => "delayed",
            Self::SevereDelay => "severe-delay",
            Self::Completed => "completed",
            Self::NotStarted => "not-started",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::OnTrackYearly => "On Track for Year",
            Self::TargetAchieved => "Monthly Target Achieved",
            Self::Delayed => "Delayed",
            Self::SevereDelay => "Severe Delays",
            Self::Completed => "Completed",
            Self::NotStarted => "Not Started",
        }
    }

    pub const fn severity(self) -> SeverityClass {
        match self {
            Self::OnTrack | Self::OnTrackYearly => SeverityClass::Warning,
            Self::TargetAchieved => SeverityClass::Success,
            Self::Delayed | Self::SevereDelay => SeverityClass::Danger,
            Self::Completed => SeverityClass::Primary,
            Self::NotStarted => SeverityClass::Secondary,
        }
    }

    /// Maps a stored status string onto the taxonomy. The alias table lists
    /// every recognized value explicitly; each currently maps to itself.
    /// Unknown, empty, and null values all land on `NotStarted`, so dirty
    /// legacy rows never block a dashboard render.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or("") {
            "on-track" => Self::OnTrack,
            "on-track-yearly" => Self::OnTrackYearly,
            "target-achieved" => Self::TargetAchieved,
            "delayed" => Self::Delayed,
            "severe-delay" => Self::SevereDelay,
            "completed" => Self::Completed,
            "not-started" => Self::NotStarted,
            _ => Self::NotStarted,
        }
    }

    /// A program with no submissions reads as not started regardless of any
    /// status carried over from a previous period.
    pub fn compute_status(has_submissions: bool, raw: Option<&str>) -> Self {
        if !has_submissions {
            return Self::NotStarted;
        }

        Self::normalize(raw)
    }
}

/// One program's rating inputs as handed over by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    #[serde(default)]
    pub raw_status: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub completion_percentage: f64,
}

impl RatingRecord {
    pub fn rating(&self) -> RatingKey {
        RatingKey::normalize(self.raw_status.as_deref())
    }
}
