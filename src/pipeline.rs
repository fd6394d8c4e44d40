//! High-level conversion pipeline.
//!
//! Combines all steps in one linear pass: parse the CSV, normalize every
//! row, serialize the full set, write the output file.
//!
//! # Example
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

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::models::Clue;
use crate::parser::parse_csv_file;
use crate::transform::normalize_all;

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Field delimiter of the input file.
    pub delimiter: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Result of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Number of records written.
    pub rows: usize,
    /// Column headers of the input file.
    pub headers: Vec<String>,
    /// Destination the document was written to.
    pub output: PathBuf,
}

/// Convert a clue CSV file to a JSON array file.
///
/// This is the main entry point. It:
/// 1. Parses the CSV
/// 2. Normalizes every row (value text becomes integer-or-null)
/// 3. Serializes the full sequence with 2-space indentation
/// 4. Writes the document to `output`, replacing any existing file
///
/// The output sequence has exactly one element per data row, in input
/// order. Any failure aborts before the destination is touched.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> ConvertResult<ConvertReport> {
    let parsed = parse_csv_file(input, options.delimiter)?;
    let headers = parsed.headers;
    let clues = normalize_all(parsed.records)?;

    write_json(&clues, output)?;

    Ok(ConvertReport {
        rows: clues.len(),
        headers,
        output: output.to_path_buf(),
    })
}

/// Serialize clues and write the document in one shot.
///
/// Nothing touches the destination until the full vector exists, so a
/// row failure can never leave a partial file behind.
fn write_json(clues: &[Clue], output: &Path) -> ConvertResult<()> {
    let mut json = serde_json::to_string_pretty(clues)?;
    json.push('\n');
    fs::write(output, json).map_err(|source| ConvertError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "air_date,round,category,value,question,answer";

    fn convert_str(csv: &str) -> (TempDir, ConvertResult<ConvertReport>, PathBuf) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("clues.csv");
        let output = dir.path().join("clues.json");
        fs::write(&input, csv).unwrap();
        let result = convert(&input, &output, &ConvertOptions::default());
        (dir, result, output)
    }

    #[test]
    fn test_default_options() {
        assert_eq!(ConvertOptions::default().delimiter, b',');
    }

    #[test]
    fn test_convert_reports_count_and_headers() {
        let csv = format!("{HEADER}\nd1,r,c,100,q1,a1\nd2,r,c,,q2,a2\n");
        let (_dir, result, output) = convert_str(&csv);
        let report = result.unwrap();

        assert_eq!(report.rows, 2);
        assert_eq!(report.headers.len(), 6);
        assert_eq!(report.output, output);
    }

    #[test]
    fn test_output_is_pretty_printed_array() {
        let csv = format!("{HEADER}\n2004-12-31,Jeopardy!,HISTORY,400,Q,A\n");
        let (_dir, result, output) = convert_str(&csv);
        result.unwrap();

        let text = fs::read_to_string(&output).unwrap();
        // 2-space indentation, one key per line.
        assert!(text.starts_with("[\n  {\n    \"air_date\": \"2004-12-31\""));
        assert!(text.ends_with("]\n"));

        let clues: Vec<Clue> = serde_json::from_str(&text).unwrap();
        assert_eq!(clues.len(), 1);
        assert_eq!(clues[0].value, Some(400));
    }

    #[test]
    fn test_empty_value_written_as_null() {
        let csv = format!("{HEADER}\nd,Final Jeopardy!,c,,q,a\n");
        let (_dir, result, output) = convert_str(&csv);
        result.unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("\"value\": null"));
    }

    #[test]
    fn test_bad_value_leaves_no_output() {
        let csv = format!("{HEADER}\nd,r,c,$400,q,a\n");
        let (_dir, result, output) = convert_str(&csv);

        assert!(matches!(result, Err(ConvertError::Normalize(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_row_leaves_no_output() {
        let csv = format!("{HEADER}\nd,r,c,400,q,a\ntoo,few\n");
        let (_dir, result, output) = convert_str(&csv);

        assert!(matches!(result, Err(ConvertError::Parse(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_existing_output_replaced() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("clues.csv");
        let output = dir.path().join("clues.json");
        fs::write(&input, format!("{HEADER}\nd,r,c,100,q,a\n")).unwrap();
        fs::write(&output, "stale garbage").unwrap();

        convert(&input, &output, &ConvertOptions::default()).unwrap();

        let clues: Vec<Clue> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn test_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("clues.csv");
        fs::write(&input, format!("{HEADER}\nd,r,c,100,q,a\n")).unwrap();

        let output = dir.path().join("missing-dir").join("clues.json");
        let err = convert(&input, &output, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::OutputWrite { .. }));
    }

    #[test]
    fn test_roundtrip_is_stable() {
        let csv = format!("{HEADER}\nd1,r,c,100,q1,a1\nd2,r,café,,q2,a2\n");
        let (_dir, result, output) = convert_str(&csv);
        result.unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let clues: Vec<Clue> = serde_json::from_str(&text).unwrap();
        let mut reserialized = serde_json::to_string_pretty(&clues).unwrap();
        reserialized.push('\n');
        assert_eq!(reserialized, text);
    }
}
