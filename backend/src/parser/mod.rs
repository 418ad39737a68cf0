//! Line-oriented CSV parser.
//!
//! Turns raw CSV text into a [`Table`] of string cells. One line is one row;
//! double quotes are stripped everywhere and every comma splits a cell, so
//! quoted fields containing commas or newlines are not supported.
//!
//! The parser never fails. Shape problems are caught beforehand by
//! [`crate::validation::is_valid_csv`].

/// One parsed line: its cells in input order.
pub type Row = Vec<String>;

/// Parsed CSV: rows in input order. Rows may differ in length.
pub type Table = Vec<Row>;

/// Cell separator.
pub const DELIMITER: char = ',';

/// Parse CSV text into a table.
///
/// Lines of zero length are dropped (a line holding only spaces is kept).
/// Cells are not trimmed.
///
/// # Example
/// ```
/// use csvjson::parse_csv;
///
/// let table = parse_csv("name,age\n\"Alice\",30\n");
///
/// assert_eq!(table, vec![vec!["name", "age"], vec!["Alice", "30"]]);
/// ```
pub fn parse_csv(csv: &str) -> Table {
    csv.split('\n')
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Split a single line into cells after removing all double quotes.
pub fn parse_line(line: &str) -> Row {
    line.replace('"', "")
        .split(DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Header row of a table, if any.
pub fn headers(table: &[Row]) -> Option<&Row> {
    table.first()
}
