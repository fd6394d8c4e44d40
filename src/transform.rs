//! Normalization of raw clue rows.
//!
//! The only typed field is `value`: empty text becomes `None`, anything
//! else must parse as a number and is truncated toward zero. The other
//! five fields pass through verbatim.

use crate::error::{NormalizeError, NormalizeResult};
use crate::models::{Clue, SourceRecord};

/// Normalize the textual `value` field into integer-or-null form.
///
/// Empty text means the clue has no dollar value (Final Jeopardy rows)
/// and becomes `None`. Anything else must parse as a finite number;
/// fractional forms like `"800.0"` or `"1000.9"` are accepted and
/// truncated toward zero, matching the archive's historical dumps.
pub fn normalize_value(raw: &str, line: u64) -> NormalizeResult<Option<i64>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let parsed: f64 = raw.trim().parse().map_err(|_| NormalizeError::NotNumeric {
        line,
        raw: raw.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(NormalizeError::NotFinite {
            line,
            raw: raw.to_string(),
        });
    }

    Ok(Some(parsed.trunc() as i64))
}

/// Normalize one parsed row into a [`Clue`].
///
/// `line` is the 1-based input line of the row, used in error messages.
pub fn normalize(record: SourceRecord, line: u64) -> NormalizeResult<Clue> {
    let value = normalize_value(&record.value, line)?;
    Ok(Clue {
        air_date: record.air_date,
        round: record.round,
        category: record.category,
        value,
        question: record.question,
        answer: record.answer,
    })
}

/// Normalize every parsed row, preserving input order.
///
/// The first unparseable value aborts the whole run; there is no
/// partial-success mode.
pub fn normalize_all(records: Vec<SourceRecord>) -> NormalizeResult<Vec<Clue>> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| normalize(record, idx as u64 + 2))
        .collect()
}
