//! Domain models for the clue conversion pipeline.
//!
//! - [`SourceRecord`] - one raw CSV row, all fields as text
//! - [`Clue`] - one normalized output record with a numeric-or-null value

use serde::{Deserialize, Serialize};

// =============================================================================
// Source Record (CSV row)
// =============================================================================

/// One raw row from a clue archive, exactly as read from the CSV.
///
/// Every field is text at this point; `value` may be empty (Final
/// Jeopardy rows carry no dollar value). Columns beyond these six are
/// ignored by deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceRecord {
    pub air_date: String,
    pub round: String,
    pub category: String,
    pub value: String,
    pub question: String,
    pub answer: String,
}

// =============================================================================
// Clue (output record)
// =============================================================================

/// One normalized clue, the unit of the output JSON array.
///
/// Field declaration order is the output key order. `None` serializes
/// as JSON `null`, never omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clue {
    pub air_date: String,
    pub round: String,
    pub category: String,
    pub value: Option<i64>,
    pub question: String,
    pub answer: String,
}
