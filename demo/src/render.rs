//! Plain-text and CSV rendering for the launcher.
//!
//! Both renderers are `Display` wrappers, so they print straight to stdout
//! with `print!("{}", ...)` and format into strings with `to_string()`.

use std::fmt;

use ehospital_contracts::series::TimeSeriesTable;
use ehospital_views::{Panel, RoleView};

const RULE_WIDTH: usize = 60;

/// A whole page: title banner, caption, then every panel.
pub struct ViewText<'a>(pub &'a RoleView);

impl fmt::Display for ViewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", "═".repeat(RULE_WIDTH))?;
        writeln!(f, "  {}", view.title)?;
        writeln!(f, "  {}", view.caption)?;
        writeln!(f, "{}", "═".repeat(RULE_WIDTH))?;

        for panel in &view.panels {
            writeln!(f)?;
            write_panel(f, panel)?;
        }
        writeln!(f)
    }
}

fn write_panel(f: &mut fmt::Formatter<'_>, panel: &Panel) -> fmt::Result {
    if !panel.title().is_empty() {
        writeln!(f, "── {} ──", panel.title())?;
    }

    match panel {
        Panel::Chart { table, .. } => {
            let headers: Vec<String> = std::iter::once("date".to_string())
                .chain(table.metric_names().map(str::to_string))
                .collect();
            let rows: Vec<Vec<String>> = table
                .rows()
                .map(|(date, values)| {
                    std::iter::once(date.to_string())
                        .chain(values.iter().map(|v| format!("{:.1}", v)))
                        .collect()
                })
                .collect();
            write_grid(f, &headers, &rows)
        }
        Panel::Metrics { cards, .. } => {
            for card in cards {
                writeln!(f, "  {:<28} {}", card.label, card.value)?;
            }
            Ok(())
        }
        Panel::Table { table, .. } => write_grid(f, &table.headers, &table.rows),
        Panel::Text { body, .. } => {
            for line in body.lines() {
                writeln!(f, "  {}", line)?;
            }
            Ok(())
        }
        Panel::Alert { message, .. } => writeln!(f, "  ⚠  {}", message),
        Panel::Unavailable { reason, .. } => writeln!(f, "  (unavailable) {}", reason),
    }
}

/// Left-aligned columns, each as wide as its widest cell.
fn write_grid(f: &mut fmt::Formatter<'_>, headers: &[String], rows: &[Vec<String>]) -> fmt::Result {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_grid_line(f, headers, &widths)?;
    write_grid_line(f, &rule, &widths)?;
    for row in rows {
        write_grid_line(f, row, &widths)?;
    }
    Ok(())
}

fn write_grid_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
        .collect();
    writeln!(f, "  {}", padded.join("  ").trim_end())
}

/// `date,<metric>,...` header followed by one line per day.
pub struct TableCsv<'a>(pub &'a TimeSeriesTable);

impl fmt::Display for TableCsv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        write!(f, "date")?;
        for name in table.metric_names() {
            write!(f, ",{}", name)?;
        }
        writeln!(f)?;

        for (date, values) in table.rows() {
            write!(f, "{}", date)?;
            for value in values {
                write!(f, ",{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
