//! Clinical staff page: test and report status plus active alerts.

use crate::{
    mock_data::{staff_alerts, test_report_status},
    panel::Panel,
};

pub fn panels() -> Vec<Panel> {
    let mut panels = vec![Panel::Table {
        title: "Test and Report Status".to_string(),
        table: test_report_status(),
    }];

    panels.extend(staff_alerts().into_iter().map(|message| Panel::Alert {
        title: "Alerts".to_string(),
        message: message.to_string(),
    }));

    panels
}
