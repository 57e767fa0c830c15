//! E-Hospital Dashboard: command-line launcher
//!
//! Prints any role page as plain text (or JSON), or dumps a generated vitals
//! series. Charts are drawn from deterministic synthetic data; every table is
//! fictional.
//!
//! Usage:
//!   cargo run -p demo -- all
//!   cargo run -p demo -- doctor --end 2025-01-30
//!   cargo run -p demo -- patient --metric heart_rate --metric weight_kg --test urine
//!   cargo run -p demo -- series --identity seed-42 --periods 30 --metric heart_rate:noise:72:2:5

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    metric::MetricSpec,
    role::Role,
    series::{Identity, SeriesRequest},
};
use ehospital_views::{Dashboard, DashboardConfig, TestKind, ViewOptions};

mod render;

// ── CLI definition ────────────────────────────────────────────────────────────

/// E-Hospital multi-role demonstration dashboard.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "E-hospital dashboard launcher",
    long_about = "Prints the doctor, patient, clinical staff, and analytics pages of the\n\
                  e-hospital demo dashboard, or dumps a deterministic vitals series."
)]
struct Cli {
    /// View presets (TOML). Defaults to the built-in presets.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Last day shown on generated charts (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    end: Option<NaiveDate>,

    /// Print pages as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every page in menu order.
    All,
    /// Home page: system overview.
    Overview,
    /// Doctor dashboard: vitals chart, risk scores, recommendation.
    Doctor,
    /// Patient portal: health metrics, lab results, events, prescriptions.
    Patient {
        /// Metric to chart (repeatable). Defaults to the preset's selection.
        #[arg(long = "metric")]
        metrics: Vec<String>,
        /// Lab panel to show: blood or urine.
        #[arg(long, default_value = "blood")]
        test: TestKind,
    },
    /// Clinical staff dashboard: test status and alerts.
    ClinicalStaff,
    /// Analytics & management dashboard: KPIs and model performance.
    Analytics,
    /// Generate one vitals series and print it.
    Series {
        /// Seed identity: an integer seed or any name.
        #[arg(long)]
        identity: Identity,
        /// Number of days.
        #[arg(long, default_value_t = 30)]
        periods: usize,
        /// name:mode:baseline:amplitude[:window] (repeatable).
        /// Modes: walk, noise, uniform (uniform reads baseline:amplitude as low:high).
        #[arg(long = "metric", required = true, value_parser = parse_metric)]
        metrics: Vec<MetricSpec>,
        #[arg(long, value_enum, default_value_t = SeriesFormat::Csv)]
        format: SeriesFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeriesFormat {
    Csv,
    Json,
}

/// Parse `name:mode:baseline:amplitude[:window]`.
fn parse_metric(s: &str) -> Result<MetricSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(4..=5).contains(&parts.len()) {
        return Err(format!(
            "expected name:mode:baseline:amplitude[:window], got '{}'",
            s
        ));
    }

    let number = |field: &str, value: &str| -> Result<f64, String> {
        value
            .parse::<f64>()
            .map_err(|e| format!("{} '{}': {}", field, value, e))
    };

    let mut spec = MetricSpec::new(
        parts[0],
        number("baseline", parts[2])?,
        number("amplitude", parts[3])?,
        parts[1].parse()?,
    );
    if let Some(window) = parts.get(4) {
        spec.smooth_window = window
            .parse()
            .map_err(|e| format!("window '{}': {}", window, e))?;
    }
    Ok(spec)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> DashboardResult<()> {
    let end_date = cli
        .end
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    debug!(%end_date, "render date resolved");

    let page = |role: Role, options: ViewOptions| -> DashboardResult<()> {
        let dashboard = load_dashboard(cli.config.as_deref())?;
        show(&dashboard, role, &options, cli.json)
    };

    match cli.command {
        Command::All => {
            let dashboard = load_dashboard(cli.config.as_deref())?;
            let options = ViewOptions::new(end_date);
            for role in Role::ALL {
                show(&dashboard, role, &options, cli.json)?;
            }
            Ok(())
        }
        Command::Overview => page(Role::Home, ViewOptions::new(end_date)),
        Command::Doctor => page(Role::Doctor, ViewOptions::new(end_date)),
        Command::Patient { metrics, test } => {
            let mut options = ViewOptions::new(end_date).with_test_kind(test);
            if !metrics.is_empty() {
                options = options.with_metrics(metrics);
            }
            page(Role::Patient, options)
        }
        Command::ClinicalStaff => page(Role::ClinicalStaff, ViewOptions::new(end_date)),
        Command::Analytics => page(Role::Analytics, ViewOptions::new(end_date)),
        Command::Series {
            identity,
            periods,
            metrics,
            format,
        } => run_series(SeriesRequest::new(identity, periods, end_date, metrics), format),
    }
}

fn load_dashboard(path: Option<&Path>) -> DashboardResult<Dashboard> {
    let config = match path {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::embedded()?,
    };
    Ok(Dashboard::new(config))
}

// ── Command handlers ──────────────────────────────────────────────────────────

fn show(dashboard: &Dashboard, role: Role, options: &ViewOptions, json: bool) -> DashboardResult<()> {
    let view = dashboard.view(role, options)?;
    if json {
        println!("{}", to_json(&view)?);
    } else {
        print!("{}", render::ViewText(&view));
    }
    Ok(())
}

fn run_series(request: SeriesRequest, format: SeriesFormat) -> DashboardResult<()> {
    let table = ehospital_vitals::generate(&request)?;
    match format {
        SeriesFormat::Csv => print!("{}", render::TableCsv(&table)),
        SeriesFormat::Json => println!("{}", to_json(&table)?),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> DashboardResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| DashboardError::InvalidRequest {
        reason: format!("failed to serialize output: {}", e),
    })
}
