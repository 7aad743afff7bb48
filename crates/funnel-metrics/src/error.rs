//! Error types for funnel analysis

use thiserror::Error;

/// Errors raised by funnel analysis operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FunnelError {
    #[error("funnel has no stages: at least one stage is required")]
    EmptyFunnel,

    #[error("stage at index {index} has an empty name")]
    UnnamedStage { index: usize },
}

/// Result type alias for funnel operations
pub type FunnelResult<T> = Result<T, FunnelError>;
