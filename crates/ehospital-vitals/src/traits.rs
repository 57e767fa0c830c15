//! The seam between series producers and the rendering layer.
//!
//! Views only ever ask a `SeriesSource` for a table. Whether the table is
//! drawn fresh or served from a cache is invisible to them.

use ehospital_contracts::{
    error::DashboardResult,
    series::{SeriesRequest, TimeSeriesTable},
};

/// Anything that can turn a `SeriesRequest` into a `TimeSeriesTable`.
///
/// Implementations must be deterministic: the same request always yields an
/// equal table. They must also be safe to call from several threads at once
/// without sharing random state.
pub trait SeriesSource: Send + Sync {
    /// Produce the table for `request`, or `InvalidRequest` if it is malformed.
    fn generate(&self, request: &SeriesRequest) -> DashboardResult<TimeSeriesTable>;
}
