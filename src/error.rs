//! Error types for the working-time compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating a working day.

use thiserror::Error;

/// The main error type for the compliance engine.
///
/// The compliance rules themselves are total over non-negative minute counts
/// and never fail; errors come from malformed clock-event sequences and from
/// loading a regime configuration.
///
/// # Example
///
/// ```
/// use arbzg_engine::error::EngineError;
///
/// let error = EngineError::MalformedEventSequence {
///     index: 2,
///     message: "break end without a preceding break start".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed event sequence at event 2: break end without a preceding break start"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its thresholds are inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The clock events of a day could not be paired into intervals.
    #[error("Malformed event sequence at event {index}: {message}")]
    MalformedEventSequence {
        /// Position of the offending event after sorting by timestamp, with
        /// closing events ahead of opening events at the same timestamp.
        index: usize,
        /// A description of the pairing failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
