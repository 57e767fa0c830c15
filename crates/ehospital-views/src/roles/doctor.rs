//! Doctor page.
//!
//! Layout:
//!   1. Vitals chart for the doctor preset (every metric)
//!   2. Latest-vitals cards: last value and period mean per metric
//!   3. Simulated AI diagnostic risk cards
//!   4. LLM recommendation placeholder

use crate::{
    dashboard::Dashboard,
    mock_data::{diagnostic_risk_cards, llm_recommendation_placeholder},
    panel::{Card, Panel, ViewOptions},
};

pub fn panels(dashboard: &Dashboard, options: &ViewOptions) -> Vec<Panel> {
    let preset = &dashboard.config().doctor;
    let chart = dashboard.chart(preset, options, &preset.initial_selection());

    let latest: Option<Vec<Card>> = match &chart {
        Panel::Chart { table, .. } => Some(
            table
                .metric_names()
                .filter_map(|name| {
                    let summary = table.summary(name)?;
                    Some(Card::new(
                        name,
                        format!("{:.1} (mean {:.1})", summary.last, summary.mean),
                    ))
                })
                .collect(),
        ),
        _ => None,
    };

    let mut panels = vec![chart];
    if let Some(cards) = latest {
        panels.push(Panel::Metrics {
            title: "Latest Vitals".to_string(),
            cards,
        });
    }

    panels.push(Panel::Metrics {
        title: "AI Diagnostic Results (Simulated)".to_string(),
        cards: diagnostic_risk_cards(),
    });
    panels.push(Panel::Text {
        title: "LLM Clinical Recommendation".to_string(),
        body: llm_recommendation_placeholder().to_string(),
    });

    panels
}
