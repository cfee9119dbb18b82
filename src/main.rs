//! False sharing benchmark.
//!
//! Usage: false-sharing
//! Takes no arguments. Build with --release for meaningful numbers.

use false_sharing::{init_logging, BenchConfig, Experiment};

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut experiment = Experiment::new(BenchConfig::default())?;
    let report = experiment.run()?;
    report.write_to(std::io::stdout().lock())?;
    Ok(())
}
