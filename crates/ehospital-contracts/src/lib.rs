//! # ehospital-contracts
//!
//! Shared types, request schemas, and error contracts for the e-hospital
//! dashboard.
//!
//! All crates in the workspace import from here. No generation logic lives in
//! this crate, only data definitions, accessors, and error types.

pub mod error;
pub mod metric;
pub mod role;
pub mod series;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use error::DashboardError;
    use metric::{GenerationMode, MetricSpec};
    use role::Role;
    use series::{Identity, MetricSeries, SeriesRequest, TimeSeriesTable};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn three_day_table() -> TimeSeriesTable {
        TimeSeriesTable::new(
            vec![date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3)],
            vec![
                MetricSeries {
                    name: "heart_rate".to_string(),
                    values: vec![70.0, 74.0, 72.0],
                },
                MetricSeries {
                    name: "systolic_bp".to_string(),
                    values: vec![120.0, 121.0, 119.0],
                },
            ],
        )
        .unwrap()
    }

    // ── TimeSeriesTable ──────────────────────────────────────────────────────

    #[test]
    fn table_rejects_misaligned_column() {
        let result = TimeSeriesTable::new(
            vec![date(2025, 1, 1), date(2025, 1, 2)],
            vec![MetricSeries {
                name: "heart_rate".to_string(),
                values: vec![70.0],
            }],
        );

        match result {
            Err(DashboardError::InvalidRequest { reason }) => {
                assert!(reason.contains("heart_rate"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn table_metric_lookup_and_rows() {
        let table = three_day_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.metric("heart_rate"), Some(&[70.0, 74.0, 72.0][..]));
        assert!(table.metric("weight_kg").is_none());

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[1], (date(2025, 1, 2), vec![74.0, 121.0]));

        let names: Vec<&str> = table.metric_names().collect();
        assert_eq!(names, vec!["heart_rate", "systolic_bp"]);
    }

    #[test]
    fn table_summary_describes_column() {
        let summary = three_day_table().summary("heart_rate").unwrap();

        assert_eq!(summary.min, 70.0);
        assert_eq!(summary.max, 74.0);
        assert_eq!(summary.mean, 72.0);
        assert_eq!(summary.last, 72.0);
    }

    #[test]
    fn table_select_reorders_and_rejects_unknown() {
        let table = three_day_table();

        let selected = table.select(&["systolic_bp"]).unwrap();
        assert_eq!(selected.series().len(), 1);
        assert_eq!(selected.dates(), table.dates());

        match table.select(&["systolic_bp", "weight_kg"]) {
            Err(DashboardError::UnknownMetric { name }) => assert_eq!(name, "weight_kg"),
            other => panic!("expected UnknownMetric, got {:?}", other),
        }
    }

    // ── Serde shapes ─────────────────────────────────────────────────────────

    #[test]
    fn identity_deserializes_integer_as_seed_and_string_as_name() {
        let seed: Identity = serde_json::from_str("42").unwrap();
        let name: Identity = serde_json::from_str("\"seed-42\"").unwrap();

        assert_eq!(seed, Identity::Seed(42));
        assert_eq!(name, Identity::Name("seed-42".to_string()));
        assert_eq!("17".parse::<Identity>().unwrap(), Identity::Seed(17));
        assert_eq!("Lisa".parse::<Identity>().unwrap(), Identity::Name("Lisa".to_string()));
    }

    #[test]
    fn metric_spec_defaults_window_to_one() {
        let spec: MetricSpec = serde_json::from_str(
            r#"{ "name": "heart_rate", "baseline": 70.0, "amplitude": 2.0, "mode": "stationary-noise" }"#,
        )
        .unwrap();

        assert_eq!(spec.smooth_window, 1);
        assert_eq!(spec.mode, GenerationMode::StationaryNoise);
    }

    #[test]
    fn series_request_serializes_end_date_as_calendar_date() {
        let request = SeriesRequest::new(
            "seed-42",
            30,
            date(2025, 1, 30),
            vec![MetricSpec::new("heart_rate", 72.0, 2.0, GenerationMode::StationaryNoise)],
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["end_date"], "2025-01-30");
        assert_eq!(json["identity"], "seed-42");
    }

    #[test]
    fn generation_mode_parses_loose_spellings() {
        assert_eq!("RANDOM_WALK".parse::<GenerationMode>(), Ok(GenerationMode::RandomWalk));
        assert_eq!("uniform".parse::<GenerationMode>(), Ok(GenerationMode::BoundedUniform));
        assert!("sine".parse::<GenerationMode>().is_err());
        assert!(!GenerationMode::RandomWalk.is_smoothed());
        assert!(GenerationMode::BoundedUniform.is_smoothed());
    }

    #[test]
    fn role_parses_menu_names() {
        assert_eq!("clinical-staff".parse::<Role>(), Ok(Role::ClinicalStaff));
        assert_eq!("overview".parse::<Role>(), Ok(Role::Home));
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(Role::ALL.len(), 5);
    }

    // ── DashboardError display messages ──────────────────────────────────────

    #[test]
    fn error_invalid_request_display() {
        let err = DashboardError::invalid("periods must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("invalid series request"));
        assert!(msg.contains("periods must be at least 1"));
    }

    #[test]
    fn error_config_error_display() {
        let err = DashboardError::ConfigError {
            reason: "missing doctor preset".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
