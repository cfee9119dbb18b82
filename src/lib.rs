//! # false-sharing
//!
//! A micro-benchmark that makes false sharing visible.
//!
//! Two threads hammer two independent `i32` fields: one increments `x`, the
//! other reads `y`. When both fields live on one cache line every write
//! invalidates the reader's copy of the line. When `y` is moved to its own
//! line the threads stop interfering. A single-threaded run of both loops
//! gives a baseline with no coherency traffic at all.
//!
//! ```text
//! Time when false sharing:     <N>ms
//! Time when not false sharing: <N>ms
//! Time non-threaded:           <N>ms
//! ```
//!
//! ## Modules
//!
//! - `layout` - `SameLine` / `SplitLines` and the lanes handed to workers
//! - `workload` - volatile writer and reader loops
//! - `timing` - millisecond timer for repeated operations
//! - `experiment` - scenario driver
//! - `report` - three-line summary

pub mod constants;
pub mod error;
pub mod experiment;
pub mod insights;
pub mod layout;
pub mod report;
pub mod timing;
pub mod workload;

pub use constants::{CACHE_LINE_SIZE, ITERATIONS, TRIALS};
pub use error::{BenchError, Result};
pub use experiment::{concurrent_trial, sequential_trial, BenchConfig, Experiment, Scenario};
pub use insights::init_logging;
pub use layout::{LineAligned, ReadLane, SameLine, SharedPair, SplitLines, WriteLane};
pub use report::Report;
pub use timing::{time_ms, try_time_ms};
pub use workload::{read_y, write_x};
