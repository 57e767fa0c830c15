//! E-Hospital Dashboard: interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  [0] Home  [1] Doctor  [2] Patient  [3] Clinical Staff  [4] Analytics  │
//!   ├─── body ────────────────────────────────────────────────────────────┤
//!   │  Vitals chart (one line per metric)                                 │
//!   │  Cards / tables / text / alerts, one block per panel                │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings, patient metric selector)                     │
//!   └─────────────────────────────────────────────────────────────────────┘

use std::{io, time::Duration};

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    role::Role,
    series::TimeSeriesTable,
};
use ehospital_views::{Card, Dashboard, DashboardConfig, Panel, RoleView, StaticTable, TestKind, ViewOptions};

/// Line colors, cycled by metric column.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    dashboard: Dashboard,
    end_date: NaiveDate,
    role: Role,
    /// Index into the patient preset's metrics.
    cursor: usize,
    /// Patient chart selection, kept in preset order.
    selected: Vec<String>,
    test_kind: TestKind,
    /// The page for the current role and options.
    view: DashboardResult<RoleView>,
}

impl App {
    fn new(dashboard: Dashboard, end_date: NaiveDate) -> Self {
        let selected = dashboard.config().patient.initial_selection();
        let mut app = Self {
            dashboard,
            end_date,
            role: Role::Home,
            cursor: 0,
            selected,
            test_kind: TestKind::default(),
            view: Err(DashboardError::invalid("not rendered yet")),
        };
        app.refresh();
        app
    }

    /// Rebuild the current page. Charts come from the cached source, so this
    /// is cheap and shows the same series every time.
    fn refresh(&mut self) {
        let options = ViewOptions::new(self.end_date)
            .with_metrics(self.selected.clone())
            .with_test_kind(self.test_kind);
        self.view = self.dashboard.view(self.role, &options);
    }

    fn patient_metrics(&self) -> Vec<String> {
        self.dashboard
            .config()
            .patient
            .metric_names()
            .map(str::to_string)
            .collect()
    }

    fn select_role(&mut self, role: Role) {
        if self.role != role {
            self.role = role;
            self.refresh();
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let count = self.patient_metrics().len();
        if count == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    /// Add or remove the metric under the cursor.
    fn toggle_metric(&mut self) {
        let metrics = self.patient_metrics();
        let Some(current) = metrics.get(self.cursor) else {
            return;
        };

        let mut chosen: Vec<&String> = self.selected.iter().collect();
        if let Some(pos) = chosen.iter().position(|name| *name == current) {
            chosen.remove(pos);
        } else {
            chosen.push(current);
        }
        self.selected = metrics
            .iter()
            .filter(|name| chosen.contains(name))
            .cloned()
            .collect();
        self.refresh();
    }

    fn toggle_test_kind(&mut self) {
        self.test_kind = self.test_kind.toggled();
        self.refresh();
    }

    /// Apply one key press. Returns `false` when the app should exit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return false,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,

            KeyCode::Char(c @ '0'..='4') => {
                let index = c as usize - '0' as usize;
                if let Some(role) = Role::ALL.get(index) {
                    self.select_role(*role);
                }
            }

            // Patient-only controls.
            KeyCode::Left if self.role == Role::Patient => self.move_cursor(false),
            KeyCode::Right if self.role == Role::Patient => self.move_cursor(true),
            KeyCode::Char(' ') if self.role == Role::Patient => self.toggle_metric(),
            KeyCode::Char('t') | KeyCode::Char('T') if self.role == Role::Patient => {
                self.toggle_test_kind()
            }

            _ => {}
        }
        true
    }
}

// ── UI rendering ──────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    let footer_height = if app.role == Role::Patient { 4 } else { 3 };
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(10),               // role page
            Constraint::Length(footer_height), // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0], app);
    render_body(f, outer_chunks[1], app);
    render_footer(f, outer_chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled("E-Hospital    ", title_style)];

    for (i, role) in Role::ALL.iter().enumerate() {
        let style = if app.role == *role {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}  ", i, role.name()), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let view = match &app.view {
        Ok(view) => view,
        Err(e) => {
            let error = Paragraph::new(Span::styled(e.to_string(), Style::default().fg(Color::Red)))
                .block(panel_block(" Error "))
                .wrap(Wrap { trim: true });
            f.render_widget(error, area);
            return;
        }
    };

    let constraints: Vec<Constraint> = view.panels.iter().map(panel_constraint).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (panel, chunk) in view.panels.iter().zip(chunks.iter()) {
        render_panel(f, *chunk, panel);
    }
}

/// Charts take the free space; everything else gets its natural height.
fn panel_constraint(panel: &Panel) -> Constraint {
    let rows = match panel {
        Panel::Chart { .. } => return Constraint::Min(12),
        Panel::Metrics { .. } => 2,
        Panel::Table { table, .. } => table.rows.len() + 1,
        Panel::Text { body, .. } => body.lines().count(),
        Panel::Alert { .. } | Panel::Unavailable { .. } => 1,
    };
    Constraint::Length(rows as u16 + 2)
}

fn render_panel(f: &mut Frame, area: Rect, panel: &Panel) {
    let title = format!(" {} ", panel.title());
    match panel {
        Panel::Chart { table, .. } => render_chart(f, area, &title, table),
        Panel::Metrics { cards, .. } => render_cards(f, area, &title, cards),
        Panel::Table { table, .. } => render_table(f, area, &title, table),
        Panel::Text { body, .. } => {
            let text = Paragraph::new(body.as_str())
                .block(panel_block(&title))
                .wrap(Wrap { trim: true });
            f.render_widget(text, area);
        }
        Panel::Alert { message, .. } => {
            let alert = Paragraph::new(Span::styled(
                format!("⚠  {}", message),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .block(panel_block(&title));
            f.render_widget(alert, area);
        }
        Panel::Unavailable { reason, .. } => {
            let note = Paragraph::new(Span::styled(
                reason.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .block(panel_block(&title));
            f.render_widget(note, area);
        }
    }
}

fn render_chart(f: &mut Frame, area: Rect, title: &str, table: &TimeSeriesTable) {
    let points: Vec<Vec<(f64, f64)>> = table
        .series()
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = table
        .series()
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (series, data))| {
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(data)
        })
        .collect();

    let (low, high) = y_bounds(table);
    let x_max = table.len().saturating_sub(1).max(1) as f64;
    let x_labels = match (table.dates().first(), table.dates().last()) {
        (Some(first), Some(last)) => vec![first.to_string(), last.to_string()],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(panel_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([low, high])
                .labels(vec![format!("{:.0}", low), format!("{:.0}", high)]),
        );
    f.render_widget(chart, area);
}

/// Overall value range with a little headroom.
fn y_bounds(table: &TimeSeriesTable) -> (f64, f64) {
    let values = table.series().iter().flat_map(|s| s.values.iter().copied());
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((high - low) * 0.05).max(1.0);
    (low - pad, high + pad)
}

fn render_cards(f: &mut Frame, area: Rect, title: &str, cards: &[Card]) {
    let block = panel_block(title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if cards.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(inner);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(card.label.as_str(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                card.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(lines), *column);
    }
}

fn render_table(f: &mut Frame, area: Rect, title: &str, table: &StaticTable) {
    let widths: Vec<Constraint> = (0..table.headers.len())
        .map(|col| {
            let widest = std::iter::once(&table.headers[col])
                .chain(table.rows.iter().filter_map(|row| row.get(col)))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            Constraint::Length(widest as u16 + 2)
        })
        .collect();

    let header = Row::new(table.headers.iter().map(|h| Cell::from(h.as_str()))).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|c| Cell::from(c.as_str()))));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(panel_block(title));
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    let mut keys: Vec<Span> = vec![
        Span::styled(" [0-4] ", Style::default().fg(Color::Cyan)),
        Span::raw("Select page  "),
    ];
    if app.role == Role::Patient {
        keys.push(Span::styled("[←/→] ", Style::default().fg(Color::Cyan)));
        keys.push(Span::raw("Move  "));
        keys.push(Span::styled("[space] ", Style::default().fg(Color::Cyan)));
        keys.push(Span::raw("Toggle metric  "));
        keys.push(Span::styled("[t] ", Style::default().fg(Color::Cyan)));
        keys.push(Span::raw(format!("Test: {}  ", app.test_kind.name())));
    }
    keys.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
    keys.push(Span::raw("Quit"));
    lines.push(Line::from(keys));

    if app.role == Role::Patient {
        let mut selector: Vec<Span> = vec![Span::raw(" ")];
        for (i, name) in app.patient_metrics().into_iter().enumerate() {
            let mark = if app.selected.contains(&name) { "[x]" } else { "[ ]" };
            let mut style = Style::default().fg(Color::White);
            if i == app.cursor {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }
            selector.push(Span::styled(format!("{} {}", mark, name), style));
            selector.push(Span::raw("  "));
        }
        lines.push(Line::from(selector));
    }

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Load presets before touching the terminal so errors print normally.
    let config = DashboardConfig::embedded()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let mut app = App::new(Dashboard::new(config), chrono::Local::now().date_naive());

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn app() -> App {
        let config = DashboardConfig::embedded().unwrap();
        App::new(
            Dashboard::new(config),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_switch_roles() {
        let mut app = app();
        assert_eq!(app.role, Role::Home);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.role, Role::Patient);
        assert_eq!(app.view.as_ref().unwrap().role, Role::Patient);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.role, Role::Analytics);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('x')));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_space_toggles_metric_in_preset_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected, vec!["systolic_bp", "diastolic_bp"]);

        // Cursor on systolic_bp: remove it.
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selected, vec!["diastolic_bp"]);

        // Add it back; order follows the preset, not the toggle order.
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selected, vec!["systolic_bp", "diastolic_bp"]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        let count = app.patient_metrics().len();

        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, count - 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_patient_controls_ignored_elsewhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('t'));

        assert_eq!(app.selected, vec!["systolic_bp", "diastolic_bp"]);
        assert_eq!(app.test_kind, TestKind::Blood);
    }

    #[test]
    fn test_deselecting_everything_shows_prompt() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));

        assert!(app.selected.is_empty());
        let view = app.view.as_ref().unwrap();
        assert!(matches!(view.panels[0], Panel::Unavailable { .. }));
    }

    #[test]
    fn test_t_toggles_lab_panel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('t'));

        assert_eq!(app.test_kind, TestKind::Urine);
        let view = app.view.as_ref().unwrap();
        assert!(view.panels.iter().any(|p| p.title() == "Test Results: Urine Test"));
    }

    #[test]
    fn test_every_page_draws() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();

        for key in ['0', '1', '2', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
            terminal.draw(|f| ui(f, &app)).unwrap();
        }
    }

    #[test]
    fn test_y_bounds_pad_range() {
        let request = ehospital_contracts::series::SeriesRequest::new(
            7u64,
            10,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            vec![ehospital_contracts::metric::MetricSpec::new(
                "weight_kg",
                68.0,
                72.0,
                ehospital_contracts::metric::GenerationMode::BoundedUniform,
            )],
        );
        let table = ehospital_vitals::generate(&request).unwrap();
        let (low, high) = y_bounds(&table);

        assert!(low < 68.0);
        assert!(high > 72.0 - 1.0);
        assert!(low < high);
    }
}
