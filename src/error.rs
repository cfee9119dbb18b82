//! Error types and handling for the benchmark

use thiserror::Error;

use crate::experiment::Scenario;

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Main error type for the benchmark
#[derive(Error, Debug)]
pub enum BenchError {
    /// I/O errors while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration issue
        message: String,
    },

    /// The OS refused to create a worker thread
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// A worker thread panicked before finishing its workload
    #[error("Worker thread panicked during {scenario}")]
    WorkerPanicked {
        /// Scenario the worker was running
        scenario: Scenario,
    },
}

impl BenchError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new worker panic error
    pub fn worker_panicked(scenario: Scenario) -> Self {
        Self::WorkerPanicked { scenario }
    }
}
