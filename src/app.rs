//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - derives the credit feature record from the form values
//! - calls the backend endpoints
//! - prints summaries and verbatim response JSON

use std::io::{BufRead, Write};

use clap::Parser;

use crate::api::ApiClient;
use crate::cli::{AskArgs, Command, FertilizerArgs, ScoreArgs};
use crate::domain::{FertilizerQuery, MonthlySeries};
use crate::error::AppError;
use crate::features;

/// Entry point for the `agro` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `agro` to behave like `agro chat`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Fertilizer(args) => handle_fertilizer(args),
        Command::Ask(args) => handle_ask(args),
        Command::Chat => handle_chat(),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let income = parse_series("--income", &args.income)?;
    let expenses = parse_series("--expenses", &args.expenses)?;
    let yields = parse_series("--yield", &args.yields)?;

    let record = features::build_feature_record(&income, &expenses, &yields, &args.engagement);
    println!("{}", crate::report::format_feature_record(&record));

    if args.dry_run {
        return Ok(());
    }

    let client = ApiClient::from_env();
    let response = client
        .predict_credit_score(&record)
        .map_err(|e| AppError::new(e.exit_code(), format!("Failed to get credit score: {e}")))?;

    println!("Credit score result:");
    println!("{}", crate::report::format_response(&response));
    Ok(())
}

fn handle_fertilizer(args: FertilizerArgs) -> Result<(), AppError> {
    let query = FertilizerQuery {
        area_name: args.area,
        crop_type: args.crop,
        farm_size_acres: args.size,
    };

    let client = ApiClient::from_env();
    let response = client.fertilizer_recommendation(&query).map_err(|e| {
        AppError::new(
            e.exit_code(),
            format!("Failed to get fertilizer recommendation: {e}"),
        )
    })?;

    println!("Recommendation result:");
    println!("{}", crate::report::format_response(&response));
    Ok(())
}

fn handle_ask(args: AskArgs) -> Result<(), AppError> {
    let client = ApiClient::from_env();
    let reply = client.ask(&args.question)?;
    println!("{}", reply.display_text());
    Ok(())
}

/// Interactive chat loop.
///
/// The transcript lives only for the session; nothing is persisted. A failed
/// request is shown as a generic line and the session continues, mirroring
/// the dashboard chat widget.
fn handle_chat() -> Result<(), AppError> {
    let client = ApiClient::from_env();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Chat with FarmAI (empty line or Ctrl-D to quit)");
    loop {
        print!("Me: ");
        stdout
            .flush()
            .map_err(|e| AppError::usage(format!("Failed to flush stdout: {e}")))?;

        let mut line = String::new();
        let n = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| AppError::usage(format!("Failed to read stdin: {e}")))?;
        let question = line.trim();
        if n == 0 || question.is_empty() {
            return Ok(());
        }

        let text = match client.ask(question) {
            Ok(reply) => reply.display_text().to_string(),
            Err(_) => "Failed to get response".to_string(),
        };
        println!("{}", crate::report::format_chat_line("FarmAI", &text));
    }
}

/// Parse one comma-separated 3-month series from the CLI.
///
/// The count is validated here (the derivation core assumes exactly three
/// samples); the values themselves are parsed leniently and a garbled entry
/// becomes NaN in the series.
fn parse_series(flag: &str, raw: &[String]) -> Result<MonthlySeries, AppError> {
    if raw.len() != 3 {
        return Err(AppError::usage(
            format!("{flag} expects exactly 3 comma-separated values, got {}.", raw.len()),
        ));
    }
    Ok([
        features::parse_month(&raw[0]),
        features::parse_month(&raw[1]),
        features::parse_month(&raw[2]),
    ])
}

/// Rewrite argv so `agro` defaults to `agro chat`.
///
/// Rules:
/// - `agro`                     -> `agro chat`
/// - `agro --help/--version/-h` -> unchanged (show top-level help/version)
/// - known subcommands          -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("chat".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "fertilizer" | "ask" | "chat");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "chat flags".
    if arg1.starts_with('-') {
        argv.insert(1, "chat".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_chat() {
        assert_eq!(rewrite_args(argv(&["agro"])), argv(&["agro", "chat"]));
    }

    #[test]
    fn help_and_subcommands_are_left_alone() {
        assert_eq!(rewrite_args(argv(&["agro", "--help"])), argv(&["agro", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["agro", "score", "--income", "1,2,3"])),
            argv(&["agro", "score", "--income", "1,2,3"])
        );
    }

    #[test]
    fn parse_series_requires_three_values() {
        let err = parse_series("--income", &argv(&["1", "2"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let ok = parse_series("--income", &argv(&["1", "2", "3"])).unwrap();
        assert_eq!(ok, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn parse_series_carries_garbled_entries_as_nan() {
        let series = parse_series("--yield", &argv(&["5", "oops", "5"])).unwrap();
        assert_eq!(series[0], 5.0);
        assert!(series[1].is_nan());
    }
}
