//! Renderable view types.
//!
//! A `RoleView` is a role's page expressed as data: an ordered list of
//! `Panel`s. Front ends (the CLI printer, the terminal dashboard) walk the
//! panels and draw each one; they never build content themselves.

use chrono::NaiveDate;
use serde::Serialize;

use ehospital_contracts::{role::Role, series::TimeSeriesTable};

/// A labelled figure, e.g. `("Diabetes Risk", "12%")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub label: String,
    pub value: String,
}

impl Card {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A literal table of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StaticTable {
    /// Build a table from string literals. Every row must have one cell per header.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }
}

/// One block of a role page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Panel {
    /// Generated vitals, one line per metric.
    Chart { title: String, table: TimeSeriesTable },
    /// A row of KPI or risk cards.
    Metrics { title: String, cards: Vec<Card> },
    Table { title: String, table: StaticTable },
    Text { title: String, body: String },
    /// A warning banner.
    Alert { title: String, message: String },
    /// Shown in place of a chart that could not be produced.
    Unavailable { title: String, reason: String },
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Chart { title, .. }
            | Panel::Metrics { title, .. }
            | Panel::Table { title, .. }
            | Panel::Text { title, .. }
            | Panel::Alert { title, .. }
            | Panel::Unavailable { title, .. } => title,
        }
    }
}

/// A complete role page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleView {
    pub role: Role,
    pub title: String,
    pub caption: String,
    pub panels: Vec<Panel>,
}

/// Which lab panel the patient portal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    #[default]
    Blood,
    Urine,
}

impl TestKind {
    pub fn name(self) -> &'static str {
        match self {
            TestKind::Blood => "Blood Test",
            TestKind::Urine => "Urine Test",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TestKind::Blood => TestKind::Urine,
            TestKind::Urine => TestKind::Blood,
        }
    }
}

impl std::str::FromStr for TestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blood" => Ok(TestKind::Blood),
            "urine" => Ok(TestKind::Urine),
            other => Err(format!("unknown test kind '{}'", other)),
        }
    }
}

/// Per-render choices made by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Last day on every generated chart.
    pub end_date: NaiveDate,
    /// Patient chart selection. `None` uses the preset's default selection.
    pub selected_metrics: Option<Vec<String>>,
    pub test_kind: TestKind,
}

impl ViewOptions {
    pub fn new(end_date: NaiveDate) -> Self {
        Self {
            end_date,
            selected_metrics: None,
            test_kind: TestKind::default(),
        }
    }

    pub fn with_metrics<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_metrics = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_test_kind(mut self, kind: TestKind) -> Self {
        self.test_kind = kind;
        self
    }
}
