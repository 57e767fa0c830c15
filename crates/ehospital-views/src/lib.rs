//! # ehospital-views
//!
//! Role pages for the e-hospital dashboard.
//!
//! One [`Dashboard`] serves every role. Pages differ only in configuration
//! (the chart presets in [`DashboardConfig`]) and in which mock tables they
//! show:
//!
//! 1. **Home**: system overview.
//! 2. **Doctor**: 30-day vitals chart, latest-vitals cards, simulated risk
//!    scores, LLM recommendation placeholder.
//! 3. **Patient**: selectable 60-day health metrics, lab results, upcoming
//!    events, prescriptions, simulated assessment.
//! 4. **Clinical staff**: test status table and alerts.
//! 5. **Analytics**: KPI cards and model performance.
//!
//! All tables are hardcoded and fictional. No external systems are contacted.

pub mod config;
pub mod dashboard;
pub mod mock_data;
pub mod panel;
pub mod roles;

pub use config::{ChartPreset, DashboardConfig};
pub use dashboard::{Dashboard, NO_METRIC_SELECTED};
pub use panel::{Card, Panel, RoleView, StaticTable, TestKind, ViewOptions};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use ehospital_contracts::{
        error::{DashboardError, DashboardResult},
        role::Role,
        series::{SeriesRequest, TimeSeriesTable},
    };
    use ehospital_vitals::SeriesSource;

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(DashboardConfig::embedded().unwrap())
    }

    fn chart_of(view: &RoleView) -> &TimeSeriesTable {
        view.panels
            .iter()
            .find_map(|p| match p {
                Panel::Chart { table, .. } => Some(table),
                _ => None,
            })
            .expect("view has no chart panel")
    }

    /// A source that always fails, to exercise the chart fallback.
    struct BrokenSource;

    impl SeriesSource for BrokenSource {
        fn generate(&self, _request: &SeriesRequest) -> DashboardResult<TimeSeriesTable> {
            Err(DashboardError::invalid("generator offline"))
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    #[test]
    fn test_embedded_config_matches_page_layout() {
        let config = DashboardConfig::embedded().unwrap();

        assert_eq!(config.doctor.periods, 30);
        assert_eq!(config.patient.periods, 60);
        let doctor: Vec<&str> = config.doctor.metric_names().collect();
        assert_eq!(doctor, vec!["systolic_bp", "diastolic_bp", "heart_rate"]);
        assert_eq!(config.patient.initial_selection(), vec!["systolic_bp", "diastolic_bp"]);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        match DashboardConfig::from_toml_str("title = [[[") {
            Err(DashboardError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse view TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_selection_must_name_defined_metric() {
        let toml = DEFAULT_VIEWS_WITH_BAD_SELECTION;
        match DashboardConfig::from_toml_str(toml) {
            Err(DashboardError::ConfigError { reason }) => {
                assert!(reason.contains("spo2"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    const DEFAULT_VIEWS_WITH_BAD_SELECTION: &str = r#"
        title = "Broken"

        [doctor]
        title = "Vitals"
        identity = 7
        periods = 10

        [[doctor.metrics]]
        name = "heart_rate"
        baseline = 70.0
        amplitude = 2.0
        mode = "stationary-noise"

        [patient]
        title = "Metrics"
        identity = "p"
        periods = 10
        default_selected = ["spo2"]

        [[patient.metrics]]
        name = "heart_rate"
        baseline = 70.0
        amplitude = 2.0
        mode = "stationary-noise"
    "#;

    #[test]
    fn test_missing_file_is_config_error() {
        let result = DashboardConfig::from_file(std::path::Path::new("/nonexistent/views.toml"));
        assert!(matches!(result, Err(DashboardError::ConfigError { .. })));
    }

    // ── Doctor ────────────────────────────────────────────────────────────────

    #[test]
    fn test_doctor_view_has_thirty_day_chart() {
        let view = dashboard().view(Role::Doctor, &ViewOptions::new(end())).unwrap();

        let table = chart_of(&view);
        assert_eq!(table.len(), 30);
        assert_eq!(*table.dates().last().unwrap(), end());
        assert_eq!(table.series().len(), 3);

        let titles: Vec<&str> = view.panels.iter().map(Panel::title).collect();
        assert!(titles.contains(&"Latest Vitals"));
        assert!(titles.contains(&"AI Diagnostic Results (Simulated)"));
        assert!(titles.contains(&"LLM Clinical Recommendation"));
    }

    /// Re-rendering within a session shows exactly the same series.
    #[test]
    fn test_rerender_is_stable() {
        let dashboard = dashboard();
        let first = dashboard.view(Role::Doctor, &ViewOptions::new(end())).unwrap();
        let second = dashboard.view(Role::Doctor, &ViewOptions::new(end())).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generation_failure_becomes_unavailable_panel() {
        let dashboard =
            Dashboard::with_source(DashboardConfig::embedded().unwrap(), Box::new(BrokenSource));
        let view = dashboard.view(Role::Doctor, &ViewOptions::new(end())).unwrap();

        match &view.panels[0] {
            Panel::Unavailable { reason, .. } => assert!(reason.contains("generator offline")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
        // The static panels still render.
        assert!(view.panels.iter().any(|p| p.title() == "AI Diagnostic Results (Simulated)"));
        assert!(!view.panels.iter().any(|p| p.title() == "Latest Vitals"));
    }

    // ── Patient ───────────────────────────────────────────────────────────────

    #[test]
    fn test_patient_default_selection() {
        let view = dashboard().view(Role::Patient, &ViewOptions::new(end())).unwrap();
        let table = chart_of(&view);

        assert_eq!(table.len(), 60);
        let names: Vec<&str> = table.metric_names().collect();
        assert_eq!(names, vec!["systolic_bp", "diastolic_bp"]);
    }

    /// Narrowing the selection keeps each remaining column's values.
    #[test]
    fn test_patient_selection_keeps_values() {
        let dashboard = dashboard();
        let all = ViewOptions::new(end()).with_metrics(["systolic_bp", "heart_rate", "weight_kg"]);
        let one = ViewOptions::new(end()).with_metrics(["heart_rate"]);

        let wide = dashboard.view(Role::Patient, &all).unwrap();
        let narrow = dashboard.view(Role::Patient, &one).unwrap();

        assert_eq!(chart_of(&narrow).series().len(), 1);
        assert_eq!(
            chart_of(&wide).metric("heart_rate"),
            chart_of(&narrow).metric("heart_rate")
        );
    }

    #[test]
    fn test_patient_empty_selection_prompts() {
        let options = ViewOptions::new(end()).with_metrics(Vec::<String>::new());
        let view = dashboard().view(Role::Patient, &options).unwrap();

        match &view.panels[0] {
            Panel::Unavailable { reason, .. } => assert_eq!(reason, NO_METRIC_SELECTED),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_patient_unknown_metric_is_error() {
        let options = ViewOptions::new(end()).with_metrics(["spo2"]);

        match dashboard().view(Role::Patient, &options) {
            Err(DashboardError::UnknownMetric { name }) => assert_eq!(name, "spo2"),
            other => panic!("expected UnknownMetric, got {:?}", other),
        }
    }

    #[test]
    fn test_patient_test_kind_switches_table() {
        let dashboard = dashboard();
        let urine = ViewOptions::new(end()).with_test_kind(TestKind::Urine);
        let view = dashboard.view(Role::Patient, &urine).unwrap();

        let lab = view
            .panels
            .iter()
            .find_map(|p| match p {
                Panel::Table { title, table } if title.starts_with("Test Results") => Some(table),
                _ => None,
            })
            .unwrap();
        assert_eq!(lab.rows[0][0], "pH");
    }

    // ── Static roles ──────────────────────────────────────────────────────────

    #[test]
    fn test_clinical_staff_view_has_alert() {
        let view = dashboard().view(Role::ClinicalStaff, &ViewOptions::new(end())).unwrap();

        assert!(view.panels.iter().any(|p| matches!(
            p,
            Panel::Alert { message, .. } if message.contains("Lisa")
        )));
    }

    #[test]
    fn test_analytics_view_has_kpis_and_model_table() {
        let view = dashboard().view(Role::Analytics, &ViewOptions::new(end())).unwrap();

        match &view.panels[0] {
            Panel::Metrics { cards, .. } => assert_eq!(cards.len(), 4),
            other => panic!("expected Metrics, got {:?}", other),
        }
        match &view.panels[1] {
            Panel::Table { table, .. } => assert_eq!(table.rows[0], vec!["Heart", "0.82", "0.75", "0.78"]),
            other => panic!("expected Table, got {:?}", other),
        }
    }

    #[test]
    fn test_every_role_renders() {
        let dashboard = dashboard();
        for role in Role::ALL {
            let view = dashboard.view(role, &ViewOptions::new(end())).unwrap();
            assert_eq!(view.title, role.title());
            assert!(!view.panels.is_empty(), "{:?} has no panels", role);
        }
    }

    #[test]
    fn test_view_serializes_with_panel_kind_tags() {
        let view = dashboard().view(Role::Analytics, &ViewOptions::new(end())).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["role"], "analytics");
        assert_eq!(json["panels"][0]["kind"], "metrics");
    }
}
