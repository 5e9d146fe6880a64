//! Error types for the Hemodyn circulation simulator.
//!
//! This module provides a unified error type [`HemodynError`] that covers
//! all error conditions that can occur during scenario loading, parameter
//! validation, simulation and metric extraction.

use thiserror::Error;

/// Result type alias using [`HemodynError`].
pub type Result<T> = std::result::Result<T, HemodynError>;

/// Unified error type for all Hemodyn operations.
#[derive(Error, Debug)]
pub enum HemodynError {
    // ============ Configuration Errors ============
    /// A physical parameter that must be strictly positive is not
    #[error("Parameter '{param}' must be strictly positive (got {value})")]
    NonPositiveParameter { param: String, value: f64 },

    /// A parameter or initial state entry is NaN or infinite
    #[error("Parameter '{param}' must be finite (got {value})")]
    NonFiniteParameter { param: String, value: f64 },

    /// Elastance bounds are not ordered
    #[error("Elastance bounds must satisfy min < max (got min={min}, max={max})")]
    InvalidElastanceBounds { min: f64, max: f64 },

    /// Cycle count below one
    #[error("At least one cardiac cycle must be simulated (got {cycles})")]
    InvalidCycleCount { cycles: usize },

    /// Heart rate and time step leave no sample inside a cycle
    #[error("No samples fit in one cycle (heart rate {heart_rate}, dt {dt})")]
    EmptyCycle { heart_rate: f64, dt: f64 },

    /// Run length does not fit in addressable memory
    #[error("Run of {cycles} cycles with {points_per_cycle} samples each is too long to store")]
    RunTooLong { points_per_cycle: usize, cycles: usize },

    /// Initial state has the wrong number of entries
    #[error("Initial state must have {expected} entries (got {actual})")]
    StateDimension { expected: usize, actual: usize },

    /// Scenario file could not be parsed
    #[error("Failed to parse scenario: {message}")]
    ConfigParse { message: String },

    /// Error reading a scenario file
    #[error("Failed to read scenario file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Simulation Errors ============
    /// State left the configured divergence bound
    #[error("Numerical overflow in '{variable}' at step {step} (value: {value:.2e})")]
    NumericalOverflow {
        variable: String,
        step: usize,
        value: f64,
    },

    // ============ Extraction Errors ============
    /// Requested cycle is not fully contained in the trajectory
    #[error("Cycle {cycle} is not available (trajectory holds {available} complete cycles)")]
    IncompleteCycle { cycle: usize, available: usize },

    /// Statistics requested over an empty series
    #[error("Cannot compute statistics over an empty series")]
    EmptySeries,

    // ============ I/O Errors ============
    /// Error writing a report or export
    #[error("Output error: {message}")]
    OutputError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl HemodynError {
    /// Create a non-positive parameter error
    pub fn non_positive(param: impl Into<String>, value: f64) -> Self {
        Self::NonPositiveParameter {
            param: param.into(),
            value,
        }
    }

    /// Create a non-finite parameter error
    pub fn non_finite(param: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteParameter {
            param: param.into(),
            value,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }

    /// Whether this error stems from a bad configuration rather than a run.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveParameter { .. }
                | Self::NonFiniteParameter { .. }
                | Self::InvalidElastanceBounds { .. }
                | Self::InvalidCycleCount { .. }
                | Self::EmptyCycle { .. }
                | Self::RunTooLong { .. }
                | Self::StateDimension { .. }
                | Self::ConfigParse { .. }
                | Self::FileReadError { .. }
        )
    }
}

impl From<serde_yaml::Error> for HemodynError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            message: e.to_string(),
        }
    }
}
