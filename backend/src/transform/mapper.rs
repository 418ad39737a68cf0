//! Table to JSON mapping.
//!
//! The first row of a [`Table`](crate::parser::Table) is the header; every following row becomes
//! one JSON object keyed by the header cells.
//!
//! # Mapping rules
//!
//! - Keys keep header order.
//! - Header cells are used verbatim, empty strings included. A duplicate
//!   header name keeps its first position and takes the last value.
//! - A row shorter than the header yields `null` for each missing key.
//! - Cells beyond the header length are ignored.

use serde_json::{Map, Value};

use crate::error::ConvertResult;
use crate::parser::Row;

/// Build one JSON object per data row.
///
/// An empty table (no header) maps to no records.
pub fn table_to_records(table: &[Row]) -> Vec<Value> {
    let Some((header, rows)) = table.split_first() else {
        return Vec::new();
    };

    rows.iter().map(|row| row_to_object(header, row)).collect()
}

/// Map a table to pretty-printed JSON text (2-space indentation).
///
/// # Example
/// ```
/// use csvjson::{parse_csv, table_to_json};
///
/// let json = table_to_json(&parse_csv("x,x\n1,2\n")).unwrap();
///
/// assert_eq!(json, "[\n  {\n    \"x\": \"2\"\n  }\n]");
/// ```
pub fn table_to_json(table: &[Row]) -> ConvertResult<String> {
    let records = table_to_records(table);
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Count data rows with fewer cells than the header.
pub fn count_short_rows(table: &[Row]) -> usize {
    match table.split_first() {
        Some((header, rows)) => rows.iter().filter(|row| row.len() < header.len()).count(),
        None => 0,
    }
}

fn row_to_object(header: &[String], row: &[String]) -> Value {
    let mut obj = Map::new();

    for (i, key) in header.iter().enumerate() {
        let value = row
            .get(i)
            .map(|cell| Value::String(cell.clone()))
            .unwrap_or(Value::Null);

        obj.insert(key.clone(), value);
    }

    Value::Object(obj)
}
