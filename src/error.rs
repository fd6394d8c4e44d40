//! Error types for the clue conversion pipeline.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`ParseError`] - CSV reading errors
//! - [`NormalizeError`] - `value` field normalization errors
//! - [`ConvertError`] - Top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. There is no internal
//! recovery anywhere: every error surfaces to the top level and aborts
//! the run before anything is written to the destination.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to open or read the input file.
    #[error("Cannot read input '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no header row at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header is missing one of the required clue columns.
    #[error("Missing required column '{0}' in header")]
    MissingColumn(String),

    /// A data row disagrees with the header (wrong field count, bad quoting).
    #[error("Malformed row at line {line}: {source}")]
    Malformed {
        /// 1-based line number, counting the header as line 1.
        line: u64,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Normalization Errors
// =============================================================================

/// Errors while normalizing the `value` field.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The value text is non-empty but does not parse as a number.
    #[error("Line {line}: cannot parse value '{raw}' as a number")]
    NotNumeric { line: u64, raw: String },

    /// The value text parses but is not a finite number (nan, inf).
    #[error("Line {line}: value '{raw}' is not a finite number")]
    NotFinite { line: u64, raw: String },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by [`crate::pipeline::convert`].
/// It wraps the lower-level errors and adds the output-side variants.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV reading error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Value normalization error.
    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Destination could not be created or written.
    #[error("Cannot write output '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for normalization operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
