//! View presets loaded from TOML.
//!
//! `DashboardConfig` holds one chart preset per role that shows generated
//! vitals. Load it with `from_toml_str`, `from_file`, or `embedded()` for the
//! built-in `views/dashboard.toml`.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    metric::MetricSpec,
    series::{Identity, SeriesRequest},
};

/// The built-in presets for the doctor and patient pages.
pub const DEFAULT_VIEWS: &str = include_str!("../views/dashboard.toml");

/// One chart of generated vitals.
///
/// Example:
/// ```toml
/// [doctor]
/// title = "Patient Vitals (last 30 days)"
/// identity = "doctor-demo-patient"
/// periods = 30
///
/// [[doctor.metrics]]
/// name = "heart_rate"
/// baseline = 70.0
/// amplitude = 2.0
/// mode = "stationary-noise"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPreset {
    pub title: String,
    /// Seeds the chart's series. A string is hashed, an integer used as is.
    pub identity: Identity,
    pub periods: usize,
    pub metrics: Vec<MetricSpec>,
    /// Metrics shown before the viewer changes the selection. Empty means all.
    #[serde(default)]
    pub default_selected: Vec<String>,
}

impl ChartPreset {
    /// The request for a render ending at `end_date`.
    pub fn request(&self, end_date: NaiveDate) -> SeriesRequest {
        SeriesRequest {
            identity: self.identity.clone(),
            periods: self.periods,
            end_date,
            metrics: self.metrics.clone(),
        }
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.name.as_str())
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metric_names().any(|n| n == name)
    }

    /// The default selection, falling back to every metric.
    pub fn initial_selection(&self) -> Vec<String> {
        if self.default_selected.is_empty() {
            self.metric_names().map(str::to_string).collect()
        } else {
            self.default_selected.clone()
        }
    }
}

/// Top-level structure of a view configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    pub doctor: ChartPreset,
    pub patient: ChartPreset,
}

impl DashboardConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `ConfigError` if the TOML is malformed, does not match the
    /// expected shape, or a preset's default selection names an unknown metric.
    pub fn from_toml_str(s: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(s).map_err(|e| DashboardError::ConfigError {
            reason: format!("failed to parse view TOML: {}", e),
        })?;
        config.validate()?;

        info!(
            doctor_metrics = config.doctor.metrics.len(),
            patient_metrics = config.patient.metrics.len(),
            "view configuration loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as view configuration.
    pub fn from_file(path: &Path) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DashboardError::ConfigError {
            reason: format!("failed to read view file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The built-in presets.
    pub fn embedded() -> DashboardResult<Self> {
        Self::from_toml_str(DEFAULT_VIEWS)
    }

    fn validate(&self) -> DashboardResult<()> {
        for (role, preset) in [("doctor", &self.doctor), ("patient", &self.patient)] {
            if preset.metrics.is_empty() {
                return Err(DashboardError::ConfigError {
                    reason: format!("{} preset defines no metrics", role),
                });
            }
            if let Some(missing) = preset.default_selected.iter().find(|n| !preset.has_metric(n)) {
                return Err(DashboardError::ConfigError {
                    reason: format!(
                        "{} preset selects '{}' by default but does not define it",
                        role, missing
                    ),
                });
            }
        }
        Ok(())
    }
}
