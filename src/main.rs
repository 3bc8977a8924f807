//! Rust Accumulator CLI
//!
//! Replays a CSV script of accumulator operations and prints a summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ops.csv
//! cargo run -- --initial 100 ops.csv
//! cargo run -- --fail-fast --log-level debug ops.csv
//! ```
//!
//! The summary (`value,applied,rejected`) goes to stdout; skipped rows and
//! other diagnostics are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid initial value, rejected row under
//!   `--fail-fast`, etc.)

use rust_accumulator::{cli, logging, replay};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_level.as_filter());

    let config = args.to_replay_config();
    let mut output = std::io::stdout();
    if let Err(e) = replay::replay(&args.input_file, &config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
