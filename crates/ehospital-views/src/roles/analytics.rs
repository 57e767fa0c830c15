//! Analytics & management page: KPIs and model performance.

use crate::{
    mock_data::{analytics_kpis, model_performance},
    panel::Panel,
};

pub fn panels() -> Vec<Panel> {
    vec![
        Panel::Metrics {
            title: "Key Performance Indicators".to_string(),
            cards: analytics_kpis(),
        },
        Panel::Table {
            title: "Model Performance".to_string(),
            table: model_performance(),
        },
    ]
}
