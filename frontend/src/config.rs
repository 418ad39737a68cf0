//! Application configuration.
//!
//! Centralized constants for the converter page. Conversion settings
//! (download name, MIME type, messages) come from `csvjson::config`.

/// File types offered by the file picker.
pub const CSV_ACCEPT: &str = ".csv,text/csv,text/plain";

/// Delay before a download's object URL is released (in ms).
pub const REVOKE_URL_DELAY_MS: u32 = 1_000;

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
