//! Human readable summary of a benchmark run.

use std::fmt;
use std::io::Write;

use crate::error::Result;

/// Total milliseconds measured for each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub false_sharing_ms: u64,
    pub no_false_sharing_ms: u64,
    pub sequential_ms: u64,
}

impl Report {
    /// Write the summary followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time when false sharing:     {}ms", self.false_sharing_ms)?;
        writeln!(f, "Time when not false sharing: {}ms", self.no_false_sharing_ms)?;
        write!(f, "Time non-threaded:           {}ms", self.sequential_ms)
    }
}
