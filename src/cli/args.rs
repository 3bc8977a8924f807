use crate::replay::ReplayConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay a script of write/add/subtract operations through an accumulator
#[derive(Parser, Debug)]
#[command(name = "rust-accumulator")]
#[command(about = "Replay accumulator operations from a CSV script", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV script")]
    pub input_file: PathBuf,

    /// Value written before the first row
    #[arg(
        long = "initial",
        value_name = "NUMBER",
        allow_hyphen_values = true,
        help = "Starting value (number or numeric text, default: 0)"
    )]
    pub initial: Option<String>,

    /// Abort on the first rejected or malformed row
    #[arg(
        long = "fail-fast",
        help = "Stop at the first rejected row instead of skipping it"
    )]
    pub fail_fast: bool,

    /// Log verbosity, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level written to stderr (RUST_LOG takes precedence)"
    )]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl CliArgs {
    /// Create a ReplayConfig from CLI arguments
    pub fn to_replay_config(&self) -> ReplayConfig {
        ReplayConfig {
            initial: self.initial.clone(),
            fail_fast: self.fail_fast,
        }
    }
}
