//! Suggest command: the top tasks to do now.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use triage_core::{decode_suggest, suggest, PriorityTier, Suggestion};

use super::{read_payload, report_engine_error};
use crate::config::CliConfig;

#[derive(Args)]
pub struct SuggestArgs {
    /// JSON payload file: a task array. Reads stdin when omitted.
    pub file: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
    /// Render a human-readable listing instead of JSON
    #[arg(long)]
    pub table: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load();
    let payload = read_payload(args.file.as_deref())?;

    let tasks = match decode_suggest(payload) {
        Ok(tasks) => tasks,
        Err(err) => report_engine_error(err),
    };

    let today = Local::now().date_naive();
    let suggestion = match suggest(&tasks, today) {
        Ok(suggestion) => suggestion,
        Err(err) => report_engine_error(err),
    };

    if args.table {
        print_table(&suggestion);
        return Ok(());
    }

    let json = if args.pretty || config.pretty {
        serde_json::to_string_pretty(&suggestion)?
    } else {
        serde_json::to_string(&suggestion)?
    };
    println!("{json}");
    Ok(())
}

fn print_table(suggestion: &Suggestion) {
    println!("{}", suggestion.explanation);
    if suggestion.tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for task in &suggestion.tasks {
        let score = task.score.unwrap_or(0);
        let tier = PriorityTier::from_score(score);
        println!(
            "[{:>6}] {}  due {}  {}h  importance {}  score {}",
            tier.as_str(),
            task.title.as_deref().unwrap_or("(untitled)"),
            task.due_date.as_deref().unwrap_or("-"),
            task.estimated_hours.unwrap_or(0.0),
            task.importance.unwrap_or(0),
            score,
        );
    }
}
