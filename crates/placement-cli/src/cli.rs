//! CLI argument definitions for the placement copilot.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use placement_model::{
    DEFAULT_ALMOST_READY_THRESHOLD, DEFAULT_PROFICIENCY_THRESHOLD, DEFAULT_READY_THRESHOLD,
};

#[derive(Parser)]
#[command(
    name = "placement-copilot",
    version,
    about = "Placement Operations Copilot - candidate readiness evaluation",
    long_about = "Evaluate candidate assessment scores from a CSV file.\n\n\
                  Produces a readiness verdict, role-fit recommendations,\n\
                  strength/gap analysis, and a 7-day preparation plan."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a candidate scores CSV and print the results.
    Evaluate(EvaluateArgs),

    /// List the built-in role table.
    Roles,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// Path to the candidate scores CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Print the evaluation report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Additionally write a markdown report to the given path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Minimum average score for a Ready verdict.
    #[arg(long = "ready-threshold", default_value_t = DEFAULT_READY_THRESHOLD)]
    pub ready_threshold: f64,

    /// Minimum average score for an Almost Ready verdict.
    #[arg(long = "almost-ready-threshold", default_value_t = DEFAULT_ALMOST_READY_THRESHOLD)]
    pub almost_ready_threshold: f64,

    /// Minimum per-skill average for a skill to count as proficient.
    #[arg(long = "proficiency-threshold", default_value_t = DEFAULT_PROFICIENCY_THRESHOLD)]
    pub proficiency_threshold: f64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
