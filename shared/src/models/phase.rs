//! Roast phases

use serde::{Deserialize, Serialize};

/// The three fixed roast phases, in roast order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseName {
    /// Intake until the bean surface reaches 160°C
    Drying,
    /// 160°C until first crack (204°C)
    Browning,
    /// First crack until drop
    Development,
}

impl PhaseName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::Drying => "drying",
            PhaseName::Browning => "browning",
            PhaseName::Development => "development",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "drying" => Some(PhaseName::Drying),
            "browning" => Some(PhaseName::Browning),
            "development" => Some(PhaseName::Development),
            _ => None,
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived summary of one roast phase
///
/// Only built when the phase's defining boundary point exists. The
/// duration is deliberately not clamped: a non-monotonic log yields a
/// negative value here so callers can detect the anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    /// Phase duration re-formatted as an "m:ss" label
    pub time: String,

    /// Phase duration in seconds; may be negative for inconsistent logs
    pub duration_seconds: i64,

    /// Share of total roast time, formatted with one fractional digit,
    /// or the literal "0" when the total time is zero
    pub percentage: String,

    /// Average per-minute rate of rise over the phase, rounded to the
    /// nearest integer
    pub average_ror: i32,
}
