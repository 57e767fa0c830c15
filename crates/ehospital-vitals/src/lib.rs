//! # ehospital-vitals
//!
//! Deterministic synthetic vitals for the e-hospital dashboard.
//!
//! This crate provides:
//! - [`generate`], the pure `SeriesRequest -> TimeSeriesTable` function
//! - [`VitalsSeriesGenerator`], the same function behind the [`SeriesSource`] trait
//! - [`CachedSeries`] / [`SeriesCache`], a read-through cache that keeps a
//!   session's series stable across re-renders
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ehospital_contracts::{metric::{GenerationMode, MetricSpec}, series::SeriesRequest};
//! use ehospital_vitals::generate;
//!
//! let request = SeriesRequest::new(
//!     "seed-42",
//!     30,
//!     end_date,
//!     vec![MetricSpec::new("heart_rate", 72.0, 2.0, GenerationMode::StationaryNoise).smoothed(5)],
//! );
//! let table = generate(&request)?;
//! ```

pub mod cache;
pub mod generator;
pub mod seed;
pub mod smoothing;
pub mod traits;

pub use cache::{CacheStats, CachedSeries, SeriesCache};
pub use generator::{generate, VitalsSeriesGenerator};
pub use traits::SeriesSource;

// ── Tests ─────────────────────────────────────────────────────────────────────
