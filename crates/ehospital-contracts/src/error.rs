//! Error types for the e-hospital dashboard.
//!
//! All fallible operations return `DashboardResult<T>`. Series generation only
//! ever fails with `InvalidRequest`; the other variants belong to the
//! configuration and view layers.

use thiserror::Error;

/// The unified error type for the dashboard crates.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A series request was malformed (bad period count, bad smoothing window,
    /// inverted bounds, ...). Raised before any value is generated.
    #[error("invalid series request: {reason}")]
    InvalidRequest { reason: String },

    /// A view configuration file is missing or could not be parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A view option named a metric the chart preset does not define.
    #[error("unknown metric '{name}'")]
    UnknownMetric { name: String },
}

impl DashboardError {
    /// Shorthand for building an `InvalidRequest`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the dashboard crates.
pub type DashboardResult<T> = Result<T, DashboardError>;
