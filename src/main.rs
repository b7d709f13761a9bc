//! Command-line interface for the money splitter.
//!
//! Pipeline: merge parameters (defaults -> config file -> flags) -> split
//! -> reconcile -> print the shares before and after reconciliation.

use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use money_splitter::calculation::perform_split;
use money_splitter::config::SplitConfig;
use money_splitter::error::SplitterError;

#[derive(Parser, Debug)]
#[command(
    name = "money-splitter",
    version,
    about = "Split an amount evenly and reconcile the rounding drift"
)]
struct Cli {
    /// Total amount to divide (e.g. "800.00").
    #[arg(short, long)]
    total: Option<String>,

    /// Number of recipients sharing the total.
    #[arg(short, long)]
    recipients: Option<u32>,

    /// Decimal places per share (1 to 28).
    #[arg(short, long)]
    precision: Option<u32>,

    /// Load parameters from a YAML file before applying flag overrides.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the full outcome as JSON instead of the two share lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&cli)?;

    tracing::info!(
        total = %config.total,
        recipients = config.recipients,
        precision = config.precision,
        "starting split"
    );

    let outcome = perform_split(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        // Shares as split, then shares as reconciled.
        println!("{}", outcome.raw_shares);
        println!("{}", outcome.shares);
    }

    Ok(())
}

/// Merges defaults, the optional config file, and flag overrides, in that
/// order of precedence.
fn resolve_config(cli: &Cli) -> Result<SplitConfig, SplitterError> {
    let mut config = match &cli.config {
        Some(path) => SplitConfig::from_yaml_file(path)?,
        None => SplitConfig::default(),
    };

    if let Some(total) = &cli.total {
        config.total = Decimal::from_str(total).map_err(|_| SplitterError::InvalidTotal {
            value: total.clone(),
        })?;
    }
    if let Some(recipients) = cli.recipients {
        config.recipients = recipients;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    Ok(config)
}
