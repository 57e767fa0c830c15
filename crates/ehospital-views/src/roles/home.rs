//! Home page: system overview.

use crate::{mock_data::system_overview, panel::Panel};

pub fn panels() -> Vec<Panel> {
    vec![Panel::Text {
        title: "System Overview".to_string(),
        body: system_overview().to_string(),
    }]
}
