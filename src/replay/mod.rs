//! Script replay
//!
//! Streams an operation script through a single accumulator and writes a
//! summary of the outcome:
//!
//! 1. Opens the script with `ScriptReader`
//! 2. Creates a `ReplaySession`, writing the initial value if configured
//! 3. Hands every record (or read error) to the session
//! 4. Writes the summary with `write_summary_csv`
//!
//! Rows are processed one at a time, so memory use is constant in the
//! script length.

use crate::io::{write_summary_csv, ScriptReader};
use crate::types::{ReplayError, ReplaySummary};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub mod session;

pub use session::ReplaySession;

/// Replay settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayConfig {
    /// Value written to the accumulator before the first row
    pub initial: Option<String>,

    /// Stop at the first rejected or malformed row
    pub fail_fast: bool,
}

/// Replay a script file and write the summary to `output`
///
/// # Arguments
///
/// * `input_path` - Path to the script CSV file
/// * `config` - Initial value and error policy
/// * `output` - Writer receiving the summary CSV
///
/// # Returns
///
/// * `Ok(ReplaySummary)` - The summary that was written
/// * `Err(ReplayError)` - A fatal error, or the first row error under fail-fast
///
/// # Examples
///
/// ```no_run
/// use rust_accumulator::replay::{replay, ReplayConfig};
/// use std::path::Path;
///
/// let summary = replay(Path::new("ops.csv"), &ReplayConfig::default(), &mut std::io::stdout())
///     .expect("Replay failed");
/// println!("final value: {}", summary.value);
/// ```
pub fn replay(
    input_path: &Path,
    config: &ReplayConfig,
    output: &mut dyn Write,
) -> Result<ReplaySummary, ReplayError> {
    let reader = ScriptReader::new(input_path)?;
    let mut session = ReplaySession::new(config)?;

    info!(path = %input_path.display(), fail_fast = config.fail_fast, "replaying script");
    for item in reader {
        session.handle(item)?;
    }

    let summary = session.summary();
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "replay finished"
    );

    write_summary_csv(&summary, output)?;

    Ok(summary)
}
