//! CSV reading for clue archives.
//!
//! Reads a delimited UTF-8 file whose header names the clue columns and
//! turns every data row into a [`SourceRecord`]. No normalization happens
//! here; values stay text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ParseError;
use crate::models::SourceRecord;

/// Columns every clue archive must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["air_date", "round", "category", "value", "question", "answer"];

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed rows, in input order.
    pub records: Vec<SourceRecord>,
    /// Column headers as read from the first line.
    pub headers: Vec<String>,
}

impl ParseResult {
    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// Parse a clue CSV file.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file("data/single_jeopardy.csv", b',')?;
/// println!("Read {} rows", result.row_count());
/// ```
pub fn parse_csv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<ParseResult, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(file, delimiter)
}

/// Parse clue CSV data from any reader.
///
/// The header must contain all of [`REQUIRED_COLUMNS`]. A row whose field
/// count disagrees with the header is fatal and reported with its 1-based
/// line number (the header is line 1).
pub fn parse_reader<R: Read>(reader: R, delimiter: u8) -> Result<ParseResult, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| ParseError::Malformed { line: 1, source })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ParseError::EmptyFile);
    }

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(ParseError::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<SourceRecord>().enumerate() {
        // Data rows start on line 2, after the header.
        let record = row.map_err(|source| ParseError::Malformed {
            line: idx as u64 + 2,
            source,
        })?;
        records.push(record);
    }

    Ok(ParseResult { records, headers })
}
