//! Roast profiles

use serde::{Deserialize, Serialize};

use super::{PhaseName, PhaseSummary};

/// The analyzed profile of one roast log
///
/// Built once per accepted file and never mutated afterwards. `file_name`
/// doubles as the key for later lookup and removal. A phase slot is `None`
/// when its defining boundary temperature was never reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastProfile {
    pub file_name: String,
    pub drying: Option<PhaseSummary>,
    pub browning: Option<PhaseSummary>,
    pub development: Option<PhaseSummary>,
    /// Total roast time as an "m:ss" label, taken from the last row
    pub total_time: String,
}

impl RoastProfile {
    /// Fixed presentation order of the three phases; never reordered
    pub const PHASE_ORDER: [PhaseName; 3] = [
        PhaseName::Drying,
        PhaseName::Browning,
        PhaseName::Development,
    ];

    /// Look up one phase slot by name
    pub fn phase(&self, name: PhaseName) -> Option<&PhaseSummary> {
        match name {
            PhaseName::Drying => self.drying.as_ref(),
            PhaseName::Browning => self.browning.as_ref(),
            PhaseName::Development => self.development.as_ref(),
        }
    }

    /// Iterate all three phase slots in fixed order, present or not
    pub fn phases(&self) -> impl Iterator<Item = (PhaseName, Option<&PhaseSummary>)> {
        Self::PHASE_ORDER
            .into_iter()
            .map(move |name| (name, self.phase(name)))
    }

    /// Sum of the present phases' durations in seconds
    ///
    /// Equals the parsed total time whenever all three boundary points
    /// exist and the log is monotonic.
    pub fn present_duration_seconds(&self) -> i64 {
        self.phases()
            .filter_map(|(_, phase)| phase.map(|p| p.duration_seconds))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(duration: i64) -> PhaseSummary {
        PhaseSummary {
            time: crate::types::format_time(duration),
            duration_seconds: duration,
            percentage: "0".to_string(),
            average_ror: 0,
        }
    }

    #[test]
    fn test_phase_order_is_fixed() {
        assert_eq!(
            RoastProfile::PHASE_ORDER,
            [
                PhaseName::Drying,
                PhaseName::Browning,
                PhaseName::Development
            ]
        );
    }

    #[test]
    fn test_phase_lookup_and_iteration() {
        let profile = RoastProfile {
            file_name: "batch-1.csv".to_string(),
            drying: None,
            browning: Some(summary(180)),
            development: Some(summary(120)),
            total_time: "8:00".to_string(),
        };

        assert!(profile.phase(PhaseName::Drying).is_none());
        assert_eq!(
            profile.phase(PhaseName::Browning).unwrap().duration_seconds,
            180
        );

        let names: Vec<PhaseName> = profile.phases().map(|(name, _)| name).collect();
        assert_eq!(names, RoastProfile::PHASE_ORDER.to_vec());
        assert_eq!(profile.present_duration_seconds(), 300);
    }
}
