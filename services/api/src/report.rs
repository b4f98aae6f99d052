use clap::Args;
use serde_json::json;
use shield_sleep::error::AppError;
use shield_sleep::scoring::{evaluate, score_csv, BatchRow, MetricsSubmission, ScoreResult};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Total hours slept
    #[arg(long)]
    pub(crate) hours: f64,
    /// Sleep efficiency as a percentage (0-100)
    #[arg(long)]
    pub(crate) efficiency: f64,
    /// REM sleep as a percentage of total sleep (0-100)
    #[arg(long)]
    pub(crate) rem: f64,
    /// Age in years
    #[arg(long)]
    pub(crate) age: i64,
    /// Sex as reported by the sleeper
    #[arg(long)]
    pub(crate) sex: String,
    /// Print the full result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with totalSleepHours, sleepEfficiencyPercent, remPercent, age and sex columns
    pub(crate) csv: PathBuf,
    /// Print one JSON document instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        hours,
        efficiency,
        rem,
        age,
        sex,
        json,
    } = args;

    let submission = MetricsSubmission {
        total_sleep_hours: Some(hours),
        sleep_efficiency_percent: Some(efficiency),
        rem_percent: Some(rem),
        age: Some(age),
        sex: Some(sex),
    };
    let metrics = submission.validate()?;
    let result = evaluate(&metrics);

    if json {
        println!("{}", render_json(&json!(result)));
    } else {
        render_result(&result, "");
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, json } = args;

    let file = File::open(&csv)?;
    let rows = score_csv(file)?;

    if json {
        println!("{}", render_json(&batch_json(&rows)));
        return Ok(());
    }

    println!("Scored {} night(s) from {}", rows.len(), csv.display());
    for row in &rows {
        match &row.outcome {
            Ok(result) => {
                println!("\nLine {}", row.line);
                render_result(result, "  ");
            }
            Err(err) => println!("\nLine {}: rejected ({err})", row.line),
        }
    }

    Ok(())
}

fn render_result(result: &ScoreResult, indent: &str) {
    println!(
        "{indent}Shield score: {} | bio-age delta {} years",
        result.score, result.bio_age_delta
    );

    if result.components.is_empty() {
        println!("{indent}No issues detected.");
        return;
    }

    println!("{indent}Findings:");
    for component in &result.components {
        let alert = component.alert.as_deref().unwrap_or("(advice only)");
        println!(
            "{indent}  - [{}] -{} pts: {}",
            component.rule.label(),
            component.deduction,
            alert
        );
        println!("{indent}    suggestion: {}", component.suggestion);
    }
}

fn batch_json(rows: &[BatchRow]) -> serde_json::Value {
    let rows: Vec<_> = rows
        .iter()
        .map(|row| match &row.outcome {
            Ok(result) => json!({ "line": row.line, "status": "scored", "result": result }),
            Err(err) => json!({ "line": row.line, "status": "rejected", "error": err.to_string() }),
        })
        .collect();
    json!({ "rows": rows })
}

fn render_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
