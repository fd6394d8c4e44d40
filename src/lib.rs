//! # Clueload - Jeopardy clue CSV to JSON conversion
//!
//! Clueload turns a CSV archive of trivia clues into the JSON array the
//! game board loads, normalizing the dollar `value` field from text into
//! integer-or-null.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  Clue JSON  │
//! │   (UTF-8)   │     │  (rows)     │     │ (value→int) │     │  (pretty)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clueload::{convert, ConvertOptions};
//! use std::path::Path;
//!
//! let report = convert(
//!     Path::new("data/single_jeopardy.csv"),
//!     Path::new("data/single_jeopardy.json"),
//!     &ConvertOptions::default(),
//! )?;
//! println!("Converted {} rows", report.rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (SourceRecord, Clue)
//! - [`parser`] - CSV reading
//! - [`transform`] - Value normalization
//! - [`pipeline`] - The end-to-end conversion

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Pipeline
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, NormalizeError, NormalizeResult, ParseError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Clue, SourceRecord};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{parse_csv_file, parse_reader, ParseResult, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{normalize, normalize_all, normalize_value};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{convert, ConvertOptions, ConvertReport};
