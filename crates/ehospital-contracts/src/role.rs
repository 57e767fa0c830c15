//! Dashboard roles.
//!
//! Each role has one page in the dashboard. Roles only select which view is
//! rendered; there is no access control behind them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Home,
    Doctor,
    Patient,
    ClinicalStaff,
    Analytics,
}

impl Role {
    /// Every role, in menu order.
    pub const ALL: [Role; 5] = [
        Role::Home,
        Role::Doctor,
        Role::Patient,
        Role::ClinicalStaff,
        Role::Analytics,
    ];

    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            Role::Home => "Home",
            Role::Doctor => "Doctor Dashboard",
            Role::Patient => "Patient Portal",
            Role::ClinicalStaff => "Clinical Staff",
            Role::Analytics => "Analytics & Management",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Role::Home => "E-Hospital Interactive Dashboard",
            Role::Doctor => "Doctor Dashboard",
            Role::Patient => "Patient Portal",
            Role::ClinicalStaff => "Clinical Staff Dashboard",
            Role::Analytics => "Analytics & Management Dashboard",
        }
    }

    /// One-line description under the heading.
    pub fn caption(self) -> &'static str {
        match self {
            Role::Home => {
                "Welcome to the E-hospital data management platform. Select a role to switch dashboards."
            }
            Role::Doctor => "For doctors to view patient AI diagnostics and clinical recommendations",
            Role::Patient => "For patients to view personal health trends and AI assessments",
            Role::ClinicalStaff => "For nurses and technicians to monitor patient status and tasks",
            Role::Analytics => "For analysts to monitor KPIs and model performance",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "home" | "overview" => Ok(Role::Home),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            "clinical" | "clinical-staff" => Ok(Role::ClinicalStaff),
            "analytics" => Ok(Role::Analytics),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}
