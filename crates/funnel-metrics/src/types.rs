use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a conversion funnel
///
/// Position in the slice encodes funnel order: first = entry, last = terminal
/// conversion. Reordering stages changes the meaning of every computed rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    /// Display label, must be non-empty
    pub name: String,
    /// Count of units (e.g. users) that reached this stage
    pub value: u64,
}

impl FunnelStage {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Computed metrics for a single funnel stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageMetrics {
    pub name: String,
    pub value: u64,
    /// Percentage of the previous stage that reached this stage, one decimal.
    /// The entry stage is defined as 100.0.
    pub conversion_rate: f64,
    /// Complement of the conversion rate. Goes negative when a later stage
    /// exceeds its predecessor - surfaced as a data-quality signal, not clamped.
    pub drop_off_rate: f64,
    /// Units lost relative to the previous stage. Signed for the same reason
    /// as `drop_off_rate`; the entry stage reports 0.
    pub attrition: i64,
}

impl StageMetrics {
    /// Severity tier for this stage's conversion rate
    pub fn severity(&self) -> Severity {
        Severity::classify(self.conversion_rate)
    }
}

/// End-to-end summary of a funnel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSummary {
    /// Count at the entry stage
    pub total_entries: u64,
    /// Count at the terminal stage
    pub total_conversions: u64,
    /// Units lost between entry and exit, signed
    pub total_attrition: i64,
    /// Last stage relative to first, one decimal. A single-stage funnel
    /// reports 100.0 by policy.
    pub overall_conversion_rate: f64,
}

/// Full analysis result: per-stage metrics plus the overall summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelReport {
    pub stages: Vec<StageMetrics>,
    pub summary: FunnelSummary,
}

/// Visual tier for a conversion rate, used by renderers to pick badge colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Rate >= 70
    Healthy,
    /// 40 <= rate < 70
    Warning,
    /// Rate < 40
    Critical,
}

impl Severity {
    /// Classify a conversion rate (in percent) into its tier.
    ///
    /// Boundaries are inclusive on the lower edge of each tier: exactly 70.0
    /// is healthy, exactly 40.0 is warning.
    pub fn classify(conversion_rate: f64) -> Self {
        if conversion_rate >= 70.0 {
            Severity::Healthy
        } else if conversion_rate >= 40.0 {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Healthy => write!(f, "healthy"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::classify(70.0), Severity::Healthy);
        assert_eq!(Severity::classify(69.9), Severity::Warning);
        assert_eq!(Severity::classify(40.0), Severity::Warning);
        assert_eq!(Severity::classify(39.9), Severity::Critical);
        assert_eq!(Severity::classify(100.0), Severity::Healthy);
        assert_eq!(Severity::classify(0.0), Severity::Critical);
    }

    #[test]
    fn test_severity_display_matches_serde() {
        for severity in [Severity::Healthy, Severity::Warning, Severity::Critical] {
            let displayed = severity.to_string();
            let serialized = serde_json::to_string(&severity).unwrap();
            assert_eq!(
                serialized,
                format!("\"{}\"", displayed),
                "Display and serde forms must agree for renderers"
            );
        }
    }

    #[test]
    fn test_stage_metrics_severity() {
        let stage = StageMetrics {
            name: "Checkout".to_string(),
            value: 1200,
            conversion_rate: 42.9,
            drop_off_rate: 57.1,
            attrition: 1600,
        };
        assert_eq!(stage.severity(), Severity::Warning);
    }
}
