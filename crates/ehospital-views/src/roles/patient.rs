//! Patient portal page.
//!
//! The chart is generated for the whole patient preset and then narrowed to
//! the viewer's selection, so toggling a metric never changes the values of
//! the others.

use ehospital_contracts::error::DashboardResult;

use crate::{
    dashboard::Dashboard,
    mock_data::{
        blood_test_results, historical_prescriptions, patient_ai_assessment, portal_footer,
        upcoming_events, urine_test_results,
    },
    panel::{Panel, TestKind, ViewOptions},
};

pub fn panels(dashboard: &Dashboard, options: &ViewOptions) -> DashboardResult<Vec<Panel>> {
    let preset = &dashboard.config().patient;
    let selection = Dashboard::resolve_selection(preset, options)?;

    let test_results = match options.test_kind {
        TestKind::Blood => blood_test_results(),
        TestKind::Urine => urine_test_results(),
    };

    Ok(vec![
        dashboard.chart(preset, options, &selection),
        Panel::Table {
            title: format!("Test Results: {}", options.test_kind.name()),
            table: test_results,
        },
        Panel::Table {
            title: "Upcoming Events".to_string(),
            table: upcoming_events(),
        },
        Panel::Table {
            title: "Historical Prescriptions".to_string(),
            table: historical_prescriptions(),
        },
        Panel::Text {
            title: "AI Health Assessment".to_string(),
            body: patient_ai_assessment().to_string(),
        },
        Panel::Text {
            title: String::new(),
            body: portal_footer().to_string(),
        },
    ])
}
