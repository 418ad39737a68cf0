//! High-level pipeline API for CSV to JSON conversion.
//!
//! Combines every step in one call: shape check, parsing, mapping and
//! pretty-printing.
//!
//! # Example
//!
//! ```
//! use csvjson::convert_csv;
//!
//! let result = convert_csv("name,age\nAlice,30\n").unwrap();
//!
//! assert_eq!(result.csv_info.row_count, 1);
//! assert!(result.json.contains("\"name\": \"Alice\""));
//! ```

use serde::Serialize;

use super::mapper::{count_short_rows, table_to_json};
use crate::api::logs::{log_error, log_info, log_success, log_warning};
use crate::error::{ConvertError, ConvertResult};
use crate::parser::{headers, parse_csv, Row};
use crate::validation::is_valid_csv;

/// Result of a successful conversion
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Pretty-printed JSON array, one object per data row
    pub json: String,

    /// CSV parsing metadata
    pub csv_info: CsvInfo,
}

/// CSV information gathered while converting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvInfo {
    /// Header cells, verbatim
    pub headers: Vec<String>,
    /// Number of data rows (header excluded)
    pub row_count: usize,
    /// Data rows with fewer cells than the header
    pub short_rows: usize,
}

impl CsvInfo {
    /// Describe a parsed table.
    pub fn from_table(table: &[Row]) -> Self {
        Self {
            headers: headers(table).cloned().unwrap_or_default(),
            row_count: table.len().saturating_sub(1),
            short_rows: count_short_rows(table),
        }
    }
}

/// Convert CSV text to pretty-printed JSON.
///
/// This is the main entry point for conversion. It:
/// 1. Runs the CSV shape check (rejects with [`ConvertError::InvalidCsv`])
/// 2. Parses lines into a table
/// 3. Maps data rows to objects keyed by the header
/// 4. Serializes with 2-space indentation
pub fn convert_csv(csv: &str) -> ConvertResult<Conversion> {
    log_info("Checking CSV shape...");

    if !is_valid_csv(csv) {
        log_error("CSV rejected: no data rows or unrecognised shape");
        return Err(ConvertError::InvalidCsv);
    }

    let table = parse_csv(csv);
    let csv_info = CsvInfo::from_table(&table);

    log_success(format!(
        "Read {} rows, {} columns",
        csv_info.row_count,
        csv_info.headers.len()
    ));

    if csv_info.short_rows > 0 {
        log_warning(format!(
            "{} rows shorter than the header; missing cells set to null",
            csv_info.short_rows
        ));
    }

    let json = table_to_json(&table)?;
    log_success(format!("Converted {} records to JSON", csv_info.row_count));

    Ok(Conversion { json, csv_info })
}
