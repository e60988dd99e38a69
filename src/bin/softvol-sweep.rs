//! Sweep the volume range and check the conversion and balance invariants.
//!
//! Exits with status 1 if any check fails, so it can gate CI on a new
//! platform or libm.
use std::process;

use clap::Parser;
use softvol::{
    cli::formatting::{format_error, format_verdict},
    config::{Config, DiagnosticsConfig},
    diagnostics, tracing_config,
};

#[derive(Parser)]
#[command(name = "softvol-sweep")]
#[command(about = "Check software volume conversions over the full range")]
struct Cli {
    /// Raw volume step of the linear and decibel round-trip sweep
    #[arg(long)]
    round_trip_step: Option<u32>,

    /// Raw volume step of the first multiplication operand
    #[arg(long)]
    multiply_step_a: Option<u32>,

    /// Raw volume step of the second multiplication operand
    #[arg(long)]
    multiply_step_b: Option<u32>,

    /// Raw volume step of both channels in the balance sweep
    #[arg(long)]
    balance_step: Option<u32>,

    /// Largest accepted number of inexact multiplications
    #[arg(long)]
    max_mismatches: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, mut diagnostics: DiagnosticsConfig) -> DiagnosticsConfig {
        if let Some(step) = self.round_trip_step {
            diagnostics.round_trip_step = step;
        }
        if let Some(step) = self.multiply_step_a {
            diagnostics.multiply_step_a = step;
        }
        if let Some(step) = self.multiply_step_b {
            diagnostics.multiply_step_b = step;
        }
        if let Some(step) = self.balance_step {
            diagnostics.balance_step = step;
        }
        if let Some(max) = self.max_mismatches {
            diagnostics.max_mismatches = max;
        }
        diagnostics
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    tracing_config::init(config.general.log_level)?;

    config.diagnostics = cli.apply(config.diagnostics);
    if let Err(e) = config.validate() {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(2);
    }

    let report = diagnostics::run(&config.diagnostics);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
        println!("{}", format_verdict(report.passed()));
    }

    if !report.passed() {
        process::exit(1);
    }

    Ok(())
}
