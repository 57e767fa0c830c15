//! The synthetic vitals generator.
//!
//! Generation algorithm for one request:
//!
//! 1. Validate the whole request. Nothing is drawn if any part is malformed.
//! 2. Build the date axis: `periods` consecutive days ending at `end_date`.
//! 3. For each metric, in request order:
//!    a. Seed a fresh `StdRng` from (identity seed, metric name).
//!    b. Draw `periods` values according to the metric's mode.
//!    c. Smooth with a centered moving average unless the mode is a random walk.
//! 4. Assemble the table.

use chrono::{Days, NaiveDate};
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;
use tracing::debug;

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    metric::{GenerationMode, MetricSpec},
    series::{MetricSeries, SeriesRequest, TimeSeriesTable},
};

use crate::{
    seed::{identity_seed, metric_seed},
    smoothing::centered_moving_average,
    traits::SeriesSource,
};

/// Largest standard deviation accepted for the normal modes.
///
/// Normal draws stay within a few dozen standard deviations, so even a walk
/// of `usize::MAX` steps at this amplitude cannot reach infinity.
pub const MAX_NOISE_AMPLITUDE: f64 = 1e150;

/// Deterministic, stateless vitals generator.
///
/// Holds no random state of its own: every call builds its own streams from
/// the request identity, so one generator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalsSeriesGenerator;

impl VitalsSeriesGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesSource for VitalsSeriesGenerator {
    fn generate(&self, request: &SeriesRequest) -> DashboardResult<TimeSeriesTable> {
        generate(request)
    }
}

/// Generate the table for `request`.
///
/// Fails with `InvalidRequest` when:
/// - `periods` is 0 or `metrics` is empty,
/// - a `smooth_window` is even or not positive,
/// - a `BoundedUniform` metric has `baseline > amplitude`,
/// - an amplitude is negative or above `MAX_NOISE_AMPLITUDE`, or any
///   parameter is not finite,
/// - a `BoundedUniform` band is too wide to sample,
/// - the date axis would start before the earliest representable date.
pub fn generate(request: &SeriesRequest) -> DashboardResult<TimeSeriesTable> {
    validate(request)?;

    let dates = date_axis(request.end_date, request.periods)?;
    let seed = identity_seed(&request.identity);

    let series = request
        .metrics
        .iter()
        .map(|spec| {
            let mut rng = StdRng::seed_from_u64(metric_seed(seed, &spec.name));
            Ok(MetricSeries {
                name: spec.name.clone(),
                values: metric_values(spec, request.periods, &mut rng)?,
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    debug!(
        identity = %request.identity,
        periods = request.periods,
        end_date = %request.end_date,
        metrics = series.len(),
        "generated vitals series"
    );

    TimeSeriesTable::new(dates, series)
}

/// Reject malformed requests before any value is drawn.
pub fn validate(request: &SeriesRequest) -> DashboardResult<()> {
    if request.periods < 1 {
        return Err(DashboardError::invalid("periods must be at least 1"));
    }
    if request.metrics.is_empty() {
        return Err(DashboardError::invalid("at least one metric is required"));
    }

    for spec in &request.metrics {
        validate_metric(spec)?;
    }
    Ok(())
}

fn validate_metric(spec: &MetricSpec) -> DashboardResult<()> {
    if spec.smooth_window < 1 || spec.smooth_window % 2 == 0 {
        return Err(DashboardError::invalid(format!(
            "metric '{}': smooth_window must be a positive odd number, got {}",
            spec.name, spec.smooth_window
        )));
    }
    if !spec.baseline.is_finite() || !spec.amplitude.is_finite() {
        return Err(DashboardError::invalid(format!(
            "metric '{}': baseline and amplitude must be finite",
            spec.name
        )));
    }

    match spec.mode {
        GenerationMode::BoundedUniform => {
            if spec.baseline > spec.amplitude {
                return Err(DashboardError::invalid(format!(
                    "metric '{}': bounded-uniform low bound {} exceeds high bound {}",
                    spec.name, spec.baseline, spec.amplitude
                )));
            }
            // The uniform sampler scales the width by 1 / (1 - ε); that must stay finite.
            if !((spec.amplitude - spec.baseline) / (1.0 - f64::EPSILON)).is_finite() {
                return Err(DashboardError::invalid(format!(
                    "metric '{}': bounded-uniform interval is too wide",
                    spec.name
                )));
            }
        }
        GenerationMode::RandomWalk | GenerationMode::StationaryNoise => {
            if spec.amplitude < 0.0 {
                return Err(DashboardError::invalid(format!(
                    "metric '{}': amplitude must not be negative, got {}",
                    spec.name, spec.amplitude
                )));
            }
            if spec.amplitude > MAX_NOISE_AMPLITUDE {
                return Err(DashboardError::invalid(format!(
                    "metric '{}': amplitude {} exceeds the supported maximum {:e}",
                    spec.name, spec.amplitude, MAX_NOISE_AMPLITUDE
                )));
            }
        }
    }
    Ok(())
}

/// `periods` consecutive calendar days ending at (and including) `end`.
pub fn date_axis(end: NaiveDate, periods: usize) -> DashboardResult<Vec<NaiveDate>> {
    let back = periods.saturating_sub(1) as u64;
    let start = end.checked_sub_days(Days::new(back)).ok_or_else(|| {
        DashboardError::invalid(format!(
            "{} periods ending {} start before the earliest supported date",
            periods, end
        ))
    })?;
    Ok(start.iter_days().take(periods).collect())
}

/// Draw (and, where the mode calls for it, smooth) one metric column.
fn metric_values(spec: &MetricSpec, periods: usize, rng: &mut StdRng) -> DashboardResult<Vec<f64>> {
    let raw: Vec<f64> = match spec.mode {
        GenerationMode::RandomWalk => {
            let normal = normal(spec)?;
            let mut level = spec.baseline;
            (0..periods)
                .map(|_| {
                    level += rng.sample(&normal);
                    level
                })
                .collect()
        }
        GenerationMode::StationaryNoise => {
            let normal = normal(spec)?;
            (0..periods).map(|_| spec.baseline + rng.sample(&normal)).collect()
        }
        GenerationMode::BoundedUniform => {
            let uniform = Uniform::new_inclusive(spec.baseline, spec.amplitude);
            (0..periods).map(|_| rng.sample(&uniform)).collect()
        }
    };

    // Validation guarantees the window is positive.
    let window = spec.smooth_window as usize;
    if spec.mode.is_smoothed() && window > 1 {
        Ok(centered_moving_average(&raw, window))
    } else {
        Ok(raw)
    }
}

fn normal(spec: &MetricSpec) -> DashboardResult<Normal<f64>> {
    Normal::new(0.0, spec.amplitude).map_err(|e| {
        DashboardError::invalid(format!(
            "metric '{}': cannot draw normal noise with amplitude {}: {}",
            spec.name, spec.amplitude, e
        ))
    })
}
