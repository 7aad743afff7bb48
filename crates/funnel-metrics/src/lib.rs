//! Conversion funnel arithmetic
//!
//! Computes per-stage conversion rate, drop-off rate and attrition for an
//! ordered sequence of funnel stages, plus the overall conversion from entry
//! to exit. Pure functions over caller-supplied data; rendering layers consume
//! the computed [`FunnelReport`] and map it onto bar widths and badge tiers.

pub mod error;
pub mod metrics;
pub mod types;

pub use error::{FunnelError, FunnelResult};
pub use metrics::{analyze, conversion_rate, overall_conversion, stage_metrics};
pub use types::{FunnelReport, FunnelStage, FunnelSummary, Severity, StageMetrics};
