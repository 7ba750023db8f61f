//! ThesisOS CLI: company snapshot and configuration commands.
//!
//! Commands:
//! - `snapshot`: fetch one ticker and print the dashboard's summary fields
//! - `config`: print the effective configuration as TOML

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use thesisos_core::domain::{Choice, Horizon};
use thesisos_core::session::{ActiveThesis, Session, SubmitOutcome};
use thesisos_core::ThesisConfig;

#[derive(Parser)]
#[command(
    name = "thesisos",
    about = "ThesisOS CLI: automated investment thesis builder",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch company info for a ticker and print the summary.
    Snapshot {
        /// Exchange symbol (e.g., AAPL).
        ticker: String,

        /// Time horizon: short, medium, or long. Defaults to the config value.
        #[arg(long, value_parser = parse_horizon)]
        horizon: Option<Horizon>,

        /// Read <DIR>/<TICKER>.json instead of calling Yahoo Finance.
        #[arg(long, value_name = "DIR")]
        offline: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Config file. Defaults to the platform config directory.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration.
    Config {
        /// Config file. Defaults to the platform config directory.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_horizon(s: &str) -> Result<Horizon, String> {
    Horizon::from_label(s).ok_or_else(|| format!("unknown horizon '{s}' (short, medium, long)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            ticker,
            horizon,
            offline,
            json,
            config,
        } => {
            let config = load_config(config)?;
            let horizon = horizon.unwrap_or(config.ui.default_horizon);
            run_snapshot(&config, &ticker, horizon, offline, json)
        }
        Commands::Config { config } => run_config(config),
    }
}

/// Load configuration and start stderr logging at its level.
fn load_config(path: Option<PathBuf>) -> Result<ThesisConfig> {
    let (config, resolved) =
        ThesisConfig::load_or_default(path.as_deref()).context("failed to load configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log.level))
        .init();
    if let Some(p) = resolved {
        log::debug!("config path: {}", p.display());
    }
    Ok(config)
}

fn run_snapshot(
    config: &ThesisConfig,
    ticker: &str,
    horizon: Horizon,
    offline: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let provider = thesisos_core::build_provider(&config.provider, offline.as_deref())?;
    let mut session = Session::new();

    match session.submit(provider.as_ref(), ticker, horizon) {
        SubmitOutcome::Ignored => bail!("a ticker is required"),
        SubmitOutcome::Failed(err) => {
            log::debug!("fetch failed: {err}");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
        SubmitOutcome::Loaded => {}
    }

    let Some(active) = session.active() else {
        bail!("no snapshot after a successful fetch");
    };
    let report = SnapshotReport::from_active(active);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_table());
    }
    Ok(())
}

fn run_config(path: Option<PathBuf>) -> Result<()> {
    let (config, resolved) =
        ThesisConfig::load_or_default(path.as_deref()).context("failed to load configuration")?;
    match resolved {
        Some(p) if p.exists() => println!("# loaded from {}", p.display()),
        Some(p) => println!("# {} not found, using defaults", p.display()),
        None => println!("# no config directory, using defaults"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Rendered snapshot; every value is formatted the way the dashboard shows it.
#[derive(Debug, Serialize)]
struct SnapshotReport {
    ticker: String,
    horizon: Horizon,
    source: &'static str,
    company: String,
    sector: String,
    country: String,
    currency: String,
    gross_margin: String,
    debt_to_equity: String,
}

impl SnapshotReport {
    fn from_active(active: &ActiveThesis) -> Self {
        let s = &active.snapshot;
        Self {
            ticker: active.ticker.to_string(),
            horizon: active.horizon,
            source: active.source.label(),
            company: s.name_display().to_string(),
            sector: s.sector_display().to_string(),
            country: s.country_display().to_string(),
            currency: s.currency_display().to_string(),
            gross_margin: s.gross_margin_display(),
            debt_to_equity: s.debt_to_equity_display(),
        }
    }

    fn to_table(&self) -> String {
        let rows = [
            ("Ticker", self.ticker.as_str()),
            ("Horizon", self.horizon.label()),
            ("Company", self.company.as_str()),
            ("Sector", self.sector.as_str()),
            ("Country", self.country.as_str()),
            ("Currency", self.currency.as_str()),
            ("Gross Margin", self.gross_margin.as_str()),
            ("Debt / Equity", self.debt_to_equity.as_str()),
            ("Source", self.source),
        ];
        let mut out = String::new();
        for (label, value) in rows {
            out.push_str(&format!("{label:<14} {value}\n"));
        }
        out
    }
}
