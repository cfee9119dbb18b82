//! Experiment driver.
//!
//! Runs the three scenarios against one instance of each layout and collects
//! the totals into a [`Report`]:
//!
//! 1. writer and reader threads on `SameLine` (false sharing)
//! 2. writer and reader threads on `SplitLines` (no false sharing)
//! 3. writer then reader on `SameLine`, single-threaded baseline

use std::fmt;

use tracing::{debug, info, info_span, warn};

use crate::constants::{ITERATIONS, TRIALS};
use crate::error::{BenchError, Result};
use crate::layout::{SameLine, SharedPair, SplitLines};
use crate::report::Report;
use crate::timing::try_time_ms;
use crate::workload::{read_y, write_x};

/// The three timed scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Writer and reader threads on `SameLine`
    FalseSharing,
    /// Writer and reader threads on `SplitLines`
    NoFalseSharing,
    /// Writer then reader on one thread, `SameLine`
    Sequential,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::FalseSharing => "false sharing",
            Scenario::NoFalseSharing => "no false sharing",
            Scenario::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

/// Workload size for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Iterations per workload call
    pub iterations: u64,
    /// Repetitions of each scenario
    pub trials: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            trials: TRIALS,
        }
    }
}

impl BenchConfig {
    /// Override the iterations per workload call
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Override the repetitions of each scenario
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Reject zero iterations or trials
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::config("iterations must be non-zero"));
        }
        if self.trials == 0 {
            return Err(BenchError::config("trials must be non-zero"));
        }
        Ok(())
    }
}

/// Owns the layouts for the lifetime of one benchmark run.
pub struct Experiment {
    config: BenchConfig,
    same_line: Box<SameLine>,
    split_lines: Box<SplitLines>,
}

impl Experiment {
    /// Validate `config` and allocate one instance of each layout
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            same_line: Box::default(),
            split_lines: Box::default(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn same_line(&self) -> &SameLine {
        &self.same_line
    }

    pub fn split_lines(&self) -> &SplitLines {
        &self.split_lines
    }

    /// Run all three scenarios in order.
    pub fn run(&mut self) -> Result<Report> {
        let cpus = num_cpus::get();
        info!(
            cpus,
            iterations = self.config.iterations,
            trials = self.config.trials,
            "starting false sharing benchmark"
        );
        if cpus < 2 {
            warn!(cpus, "fewer than two CPUs, threaded scenarios cannot overlap");
        }

        let BenchConfig { iterations, trials } = self.config;

        let false_sharing_ms = timed(Scenario::FalseSharing, trials, || {
            concurrent_trial(&mut *self.same_line, iterations, Scenario::FalseSharing)
        })?;

        let no_false_sharing_ms = timed(Scenario::NoFalseSharing, trials, || {
            concurrent_trial(&mut *self.split_lines, iterations, Scenario::NoFalseSharing)
        })?;

        let sequential_ms = timed(Scenario::Sequential, trials, || {
            sequential_trial(&mut *self.same_line, iterations);
            Ok(())
        })?;

        Ok(Report {
            false_sharing_ms,
            no_false_sharing_ms,
            sequential_ms,
        })
    }
}

fn timed<F>(scenario: Scenario, trials: u32, op: F) -> Result<u64>
where
    F: FnMut() -> Result<()>,
{
    let _span = info_span!("scenario", %scenario).entered();
    let ms = try_time_ms(op, trials)?;
    info!(ms, "scenario finished");
    Ok(ms)
}

/// One writer and one reader thread on `layout`, joined before returning.
pub fn concurrent_trial<L: SharedPair>(
    layout: &mut L,
    iterations: u64,
    scenario: Scenario,
) -> Result<()> {
    debug!(layout = L::NAME, "concurrent trial");
    let (mut writer, reader) = layout.split();
    run_pair(
        scenario,
        move || write_x(&mut writer, iterations),
        move || read_y(reader, iterations),
    )
}

/// Run `writer` and `reader` on two named threads and join both.
fn run_pair<W, R, T>(scenario: Scenario, writer: W, reader: R) -> Result<()>
where
    W: FnOnce() + Send,
    R: FnOnce() -> T + Send,
    T: Send,
{
    crossbeam::thread::scope(|s| -> Result<()> {
        let writer_handle = s
            .builder()
            .name("writer".into())
            .spawn(move |_| writer())
            .map_err(BenchError::Spawn)?;
        let reader_handle = s
            .builder()
            .name("reader".into())
            .spawn(move |_| reader())
            .map_err(BenchError::Spawn)?;

        writer_handle
            .join()
            .map_err(|_| BenchError::worker_panicked(scenario))?;
        let _sum = reader_handle
            .join()
            .map_err(|_| BenchError::worker_panicked(scenario))?;
        Ok(())
    })
    .map_err(|_| BenchError::worker_panicked(scenario))?
}

/// Writer then reader on the calling thread.
pub fn sequential_trial<L: SharedPair>(layout: &mut L, iterations: u64) {
    debug!(layout = L::NAME, "sequential trial");
    let (mut writer, reader) = layout.split();
    write_x(&mut writer, iterations);
    let _sum = read_y(reader, iterations);
}
