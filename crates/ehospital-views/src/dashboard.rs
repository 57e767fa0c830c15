//! The dashboard: view presets plus a series source.
//!
//! `Dashboard::view` dispatches to one builder per role. Builders share the
//! chart helpers below, which turn a generation failure into an
//! `Unavailable` panel instead of failing the whole page.

use tracing::{debug, warn};

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    role::Role,
};
use ehospital_vitals::{CachedSeries, SeriesSource, VitalsSeriesGenerator};

use crate::{
    config::{ChartPreset, DashboardConfig},
    panel::{Panel, RoleView, ViewOptions},
    roles,
};

/// Message shown when the viewer deselects every metric.
pub const NO_METRIC_SELECTED: &str = "Please select at least one metric to display.";

pub struct Dashboard {
    config: DashboardConfig,
    source: Box<dyn SeriesSource>,
}

impl Dashboard {
    /// A dashboard over a cached generator, so re-renders within the session
    /// always show the same series.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_source(config, Box::new(CachedSeries::new(VitalsSeriesGenerator::new())))
    }

    pub fn with_source(config: DashboardConfig, source: Box<dyn SeriesSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Build the page for `role`.
    ///
    /// Returns `UnknownMetric` if `options` selects a metric the patient
    /// preset does not define. Generation failures do not error; the chart
    /// is replaced by an `Unavailable` panel.
    pub fn view(&self, role: Role, options: &ViewOptions) -> DashboardResult<RoleView> {
        debug!(role = ?role, end_date = %options.end_date, "building role view");

        let panels = match role {
            Role::Home => roles::home::panels(),
            Role::Doctor => roles::doctor::panels(self, options),
            Role::Patient => roles::patient::panels(self, options)?,
            Role::ClinicalStaff => roles::clinical_staff::panels(),
            Role::Analytics => roles::analytics::panels(),
        };

        Ok(RoleView {
            role,
            title: role.title().to_string(),
            caption: role.caption().to_string(),
            panels,
        })
    }

    /// Generate `preset` and keep only `selection`, or explain why not.
    pub(crate) fn chart(&self, preset: &ChartPreset, options: &ViewOptions, selection: &[String]) -> Panel {
        if selection.is_empty() {
            return Panel::Unavailable {
                title: preset.title.clone(),
                reason: NO_METRIC_SELECTED.to_string(),
            };
        }

        let table = self
            .source
            .generate(&preset.request(options.end_date))
            .and_then(|table| table.select(selection));

        match table {
            Ok(table) => Panel::Chart {
                title: preset.title.clone(),
                table,
            },
            Err(e) => {
                warn!(chart = %preset.title, error = %e, "chart unavailable");
                Panel::Unavailable {
                    title: preset.title.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Check a viewer's metric selection against `preset`.
    pub(crate) fn resolve_selection(preset: &ChartPreset, options: &ViewOptions) -> DashboardResult<Vec<String>> {
        let Some(selected) = &options.selected_metrics else {
            return Ok(preset.initial_selection());
        };
        if let Some(unknown) = selected.iter().find(|name| !preset.has_metric(name)) {
            return Err(DashboardError::UnknownMetric {
                name: unknown.clone(),
            });
        }
        Ok(selected.clone())
    }
}
