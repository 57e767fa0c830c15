//! Metric specifications for synthetic vitals.
//!
//! A `MetricSpec` describes how one vital sign is synthesized. Specs are
//! usually written in TOML view presets, so every field has a plain,
//! human-editable representation.

use serde::{Deserialize, Serialize};

/// How the values of a metric are drawn.
///
/// Example in TOML:
/// ```toml
/// mode = "random-walk"
/// mode = "stationary-noise"
/// mode = "bounded-uniform"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Baseline plus the cumulative sum of normal increments. Never smoothed.
    RandomWalk,
    /// Baseline plus an independent normal draw per day, then smoothed.
    StationaryNoise,
    /// Uniform draw from `[baseline, amplitude]`, then smoothed.
    BoundedUniform,
}

impl GenerationMode {
    /// Stable kebab-case label, matching the TOML spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::RandomWalk => "random-walk",
            GenerationMode::StationaryNoise => "stationary-noise",
            GenerationMode::BoundedUniform => "bounded-uniform",
        }
    }

    /// Whether the smoothing pass applies to this mode.
    ///
    /// A random walk is already serially correlated, so it is left as drawn.
    pub fn is_smoothed(self) -> bool {
        !matches!(self, GenerationMode::RandomWalk)
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "random-walk" | "walk" => Ok(GenerationMode::RandomWalk),
            "stationary-noise" | "noise" => Ok(GenerationMode::StationaryNoise),
            "bounded-uniform" | "uniform" => Ok(GenerationMode::BoundedUniform),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

fn default_smooth_window() -> i32 {
    1
}

/// Describes one synthetic vital sign.
///
/// For `BoundedUniform` the `baseline`/`amplitude` pair is read as the
/// `[low, high]` interval. For the other modes `amplitude` is the standard
/// deviation of the normal draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Column name in the generated table, e.g. `"heart_rate"`.
    pub name: String,
    /// Set point (or low bound for `BoundedUniform`).
    pub baseline: f64,
    /// Noise standard deviation (or high bound for `BoundedUniform`).
    pub amplitude: f64,
    pub mode: GenerationMode,
    /// Centered moving-average window. Must be positive and odd; 1 disables
    /// smoothing. Signed so that malformed configuration reaches validation
    /// instead of failing deserialization.
    #[serde(default = "default_smooth_window")]
    pub smooth_window: i32,
}

impl MetricSpec {
    /// Build an unsmoothed spec.
    pub fn new(name: impl Into<String>, baseline: f64, amplitude: f64, mode: GenerationMode) -> Self {
        Self {
            name: name.into(),
            baseline,
            amplitude,
            mode,
            smooth_window: 1,
        }
    }

    /// Return a copy with the given smoothing window.
    pub fn smoothed(mut self, window: i32) -> Self {
        self.smooth_window = window;
        self
    }
}
