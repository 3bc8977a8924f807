//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr, keeping
//! stdout free for the summary CSV.
//!
//! `RUST_LOG` takes precedence over the level given on the command line:
//! ```bash
//! RUST_LOG=rust_accumulator=debug rust-accumulator ops.csv
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize logging with a default filter directive
///
/// Safe to call multiple times; only the first call takes effect.
///
/// # Arguments
///
/// * `default_filter` - Directive used when `RUST_LOG` is not set
///   (e.g. `"warn"` or `"rust_accumulator=debug"`)
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
