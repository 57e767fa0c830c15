//! Series requests and the generated time-series table.
//!
//! A `SeriesRequest` is built fresh for every render and handed to a series
//! source. The resulting `TimeSeriesTable` is what the rendering surface
//! consumes: one shared date axis and one value sequence per metric.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DashboardError, DashboardResult},
    metric::MetricSpec,
};

/// The token that selects a deterministic random stream.
///
/// In TOML or JSON an integer is taken as an explicit seed and a string as a
/// name that gets hashed into one.
///
/// Example: `Identity::Name("seed-42".into())`, `Identity::Seed(42)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Caller-supplied seed, used as is.
    Seed(u64),
    /// Patient name or other label, mapped to a seed by a stable hash.
    Name(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Seed(seed) => write!(f, "{}", seed),
            Identity::Name(name) => f.write_str(name),
        }
    }
}

impl std::str::FromStr for Identity {
    type Err = std::convert::Infallible;

    /// All-digit input becomes a `Seed`; anything else is a `Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(seed) => Identity::Seed(seed),
            Err(_) => Identity::Name(s.to_string()),
        })
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Identity::Name(name.to_string())
    }
}

impl From<u64> for Identity {
    fn from(seed: u64) -> Self {
        Identity::Seed(seed)
    }
}

/// Everything needed to generate one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub identity: Identity,
    /// Number of days in the series (`N`).
    pub periods: usize,
    /// The last (most recent) date on the axis, inclusive.
    pub end_date: NaiveDate,
    /// Metrics to generate, in column order.
    pub metrics: Vec<MetricSpec>,
}

impl SeriesRequest {
    pub fn new(
        identity: impl Into<Identity>,
        periods: usize,
        end_date: NaiveDate,
        metrics: Vec<MetricSpec>,
    ) -> Self {
        Self {
            identity: identity.into(),
            periods,
            end_date,
            metrics,
        }
    }
}

/// One named column of a `TimeSeriesTable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Descriptive statistics over one metric column, used for metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// The value on the most recent date.
    pub last: f64,
}

/// A generated multi-metric series aligned on a daily date axis.
///
/// Invariant: every column holds exactly `dates.len()` values and the dates
/// ascend in one-day steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesTable {
    dates: Vec<NaiveDate>,
    series: Vec<MetricSeries>,
}

impl TimeSeriesTable {
    /// Assemble a table, checking that every column matches the date axis.
    pub fn new(dates: Vec<NaiveDate>, series: Vec<MetricSeries>) -> DashboardResult<Self> {
        if let Some(bad) = series.iter().find(|s| s.values.len() != dates.len()) {
            return Err(DashboardError::invalid(format!(
                "metric '{}' has {} values for {} dates",
                bad.name,
                bad.values.len(),
                dates.len()
            )));
        }
        Ok(Self { dates, series })
    }

    /// Number of rows (days).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn series(&self) -> &[MetricSeries] {
        &self.series
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// Values of the named metric, or `None` if the table has no such column.
    pub fn metric(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// Iterate rows as `(date, values-in-column-order)`.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, Vec<f64>)> + '_ {
        self.dates.iter().enumerate().map(move |(i, date)| {
            let values = self.series.iter().map(|s| s.values[i]).collect();
            (*date, values)
        })
    }

    /// Min, max, mean and latest value of the named metric.
    pub fn summary(&self, name: &str) -> Option<MetricSummary> {
        let values = self.metric(name)?;
        let last = *values.last()?;
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        Some(MetricSummary {
            min,
            max,
            mean: sum / values.len() as f64,
            last,
        })
    }

    /// A copy of this table restricted to `names`, in the order given.
    ///
    /// Returns `UnknownMetric` for the first name the table does not hold.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> DashboardResult<TimeSeriesTable> {
        let series = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.series
                    .iter()
                    .find(|s| s.name == name)
                    .cloned()
                    .ok_or_else(|| DashboardError::UnknownMetric {
                        name: name.to_string(),
                    })
            })
            .collect::<DashboardResult<Vec<_>>>()?;
        Ok(Self {
            dates: self.dates.clone(),
            series,
        })
    }
}
