//! Command-line parsing for the farm dashboard CLI.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the derivation/transport code.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "agro",
    version,
    about = "Farm dashboard CLI: credit scoring, fertilizer advice, FarmAI chat"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive credit features from three months of figures and request a score.
    Score(ScoreArgs),
    /// Request a fertilizer recommendation for a plot.
    Fertilizer(FertilizerArgs),
    /// Ask FarmAI a single question.
    Ask(AskArgs),
    /// Interactive FarmAI chat session.
    ///
    /// Running bare `agro` defaults to this command.
    Chat,
}

/// Options for the credit-scoring form.
///
/// Month values are taken as raw text, exactly as a form field would hold
/// them; parsing is lenient and a garbled value propagates as NaN into the
/// derived features rather than being rejected here.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Income for months 1-3 (comma-separated).
    #[arg(long, value_delimiter = ',', required = true, value_name = "M1,M2,M3")]
    pub income: Vec<String>,

    /// Expenses for months 1-3 (comma-separated).
    #[arg(long, value_delimiter = ',', required = true, value_name = "M1,M2,M3")]
    pub expenses: Vec<String>,

    /// Yield for months 1-3 (comma-separated).
    #[arg(
        long = "yield",
        value_delimiter = ',',
        required = true,
        value_name = "M1,M2,M3"
    )]
    pub yields: Vec<String>,

    /// Community engagement answer (Never, Rarely, Sometimes, Often, Very frequently).
    ///
    /// Any other answer scores 0.
    #[arg(long, default_value = "")]
    pub engagement: String,

    /// Print the derived feature record without calling the scoring service.
    #[arg(long)]
    pub dry_run: bool,
}

/// Options for the fertilizer-recommendation form.
#[derive(Debug, Parser, Clone)]
pub struct FertilizerArgs {
    /// Area name.
    #[arg(long)]
    pub area: String,

    /// Crop type.
    #[arg(long)]
    pub crop: String,

    /// Farm size in acres (forwarded as typed; the backend parses it).
    #[arg(long)]
    pub size: String,
}

/// Options for a one-shot question.
#[derive(Debug, Parser, Clone)]
pub struct AskArgs {
    /// The question to ask.
    pub question: String,
}
