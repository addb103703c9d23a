//! Analyze command: score a task batch and order it by strategy.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use triage_core::{decode_analyze, prioritize, Strategy};

use super::{read_payload, report_engine_error};
use crate::config::CliConfig;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON payload file: a task array, or {"tasks": [...], "strategy": "..."}.
    /// Reads stdin when omitted.
    pub file: Option<PathBuf>,
    /// Ordering strategy (fastest, impact, deadline, smart); overrides the
    /// payload envelope
    #[arg(long)]
    pub strategy: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load();
    let payload = read_payload(args.file.as_deref())?;

    let request = match decode_analyze(payload) {
        Ok(request) => request,
        Err(err) => report_engine_error(err),
    };

    // Flag wins over the envelope, the envelope over the configured default.
    let strategy = args
        .strategy
        .as_deref()
        .map(Strategy::parse)
        .or(request.strategy)
        .unwrap_or_else(|| config.strategy());

    let today = Local::now().date_naive();
    let ranked = match prioritize(&request.tasks, strategy, today) {
        Ok(ranked) => ranked,
        Err(err) => report_engine_error(err),
    };

    let json = if args.pretty || config.pretty {
        serde_json::to_string_pretty(&ranked)?
    } else {
        serde_json::to_string(&ranked)?
    };
    println!("{json}");
    Ok(())
}
