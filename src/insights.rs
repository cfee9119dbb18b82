//! Insights - diagnostic logging for the benchmark.
//!
//! Events go to stderr so stdout carries only the report.
//!
//! ```rust,ignore
//! false_sharing::init_logging();
//! ```

use tracing::Level;

/// Install the stderr fmt subscriber (call once at startup).
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_names(true)
        .try_init();
}
