//! Error types for the money splitter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while splitting and reconciling.

use thiserror::Error;

/// The main error type for the money splitter.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use money_splitter::error::SplitterError;
///
/// let error = SplitterError::InvalidRecipientCount { count: 0 };
/// assert_eq!(error.to_string(), "Invalid recipient count: 0 (must be at least 1)");
/// ```
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The recipient count was zero; a split needs at least one recipient.
    #[error("Invalid recipient count: {count} (must be at least 1)")]
    InvalidRecipientCount {
        /// The rejected recipient count.
        count: u32,
    },

    /// The decimal precision was outside the supported range.
    #[error("Invalid precision: {precision} (must be between 1 and 28)")]
    InvalidPrecision {
        /// The rejected number of decimal places.
        precision: u32,
    },

    /// A total amount could not be parsed as a decimal.
    #[error("Invalid total amount '{value}': not a decimal number")]
    InvalidTotal {
        /// The text that failed to parse.
        value: String,
    },

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
}

/// A type alias for Results that return SplitterError.
pub type SplitterResult<T> = Result<T, SplitterError>;
