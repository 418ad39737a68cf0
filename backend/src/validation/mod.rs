//! Input validation for both buffers.
//!
//! # CSV shape check
//!
//! [`is_valid_csv`] is a permissive pre-check run before conversion. It
//! recognises a "looks broken" shape and **a match means invalid**:
//!
//! - empty or whitespace-only text,
//! - a single line of comma-separated tokens (a header with no data rows).
//!
//! A token is a single-quoted string, a double-quoted string (both allowing
//! backslash escapes), or a bare run of characters without comma, quote or
//! backslash. Bare tokens may contain inner spaces or tabs; line breaks are
//! only tolerated before the first token and after the last one. Anything
//! spanning several lines of data is let through.
//!
//! # JSON syntax check
//!
//! [`validate_json`] parses with `serde_json` and returns a [`JsonValidity`]
//! so callers branch on the outcome instead of sniffing parser messages.
//! Nesting depth is unbounded; deep documents grow the stack on demand
//! through `serde_stacker`.
//!
//! Escaped lone surrogates (`"\ud800"`) are rejected as malformed, where
//! a browser `JSON.parse` would accept them.
//!
//! # Example
//!
//! ```
//! use csvjson::{is_valid_csv, validate_json, JsonValidity};
//!
//! assert!(is_valid_csv("name,age\nAlice,30\n"));
//! assert!(!is_valid_csv("name,age"));
//!
//! assert_eq!(validate_json("[]"), JsonValidity::Valid);
//! assert_eq!(validate_json("  "), JsonValidity::Empty);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{Deserialize, IgnoredAny};

use crate::error::{SaveError, SaveResult};

const SINGLE_QUOTED: &str = r#"'[^'\\]*(?:\\[\S\s][^'\\]*)*'"#;
const DOUBLE_QUOTED: &str = r#""[^"\\]*(?:\\[\S\s][^"\\]*)*""#;
const BARE: &str = r#"[^,'"\s\\]*(?:[ \t]+[^,'"\s\\]+)*"#;

static BROKEN_CSV: Lazy<Regex> = Lazy::new(|| {
    let token = format!("(?:{SINGLE_QUOTED}|{DOUBLE_QUOTED}|{BARE})");
    let pattern = format!(r"^\s*{token}[ \t]*(?:,[ \t]*{token}[ \t]*)*\s*$");
    Regex::new(&pattern).expect("Invalid embedded CSV shape pattern")
});

/// Check the CSV shape before conversion.
///
/// Returns `true` to proceed with conversion and `false` when the text
/// matches the broken-shape pattern.
pub fn is_valid_csv(csv: &str) -> bool {
    !BROKEN_CSV.is_match(csv)
}

/// Outcome of a JSON syntax check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValidity {
    /// The text parses as JSON.
    Valid,
    /// The text is empty or whitespace only.
    Empty,
    /// The text does not parse. Carries the parser message.
    Malformed(String),
}

impl JsonValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, JsonValidity::Valid)
    }

    /// Short machine-readable label: `valid`, `empty` or `malformed`.
    pub fn label(&self) -> &'static str {
        match self {
            JsonValidity::Valid => "valid",
            JsonValidity::Empty => "empty",
            JsonValidity::Malformed(_) => "malformed",
        }
    }

    /// Convert into the save error surfaced to the user, if any.
    pub fn into_result(self) -> SaveResult<()> {
        match self {
            JsonValidity::Valid => Ok(()),
            JsonValidity::Empty => Err(SaveError::EmptyJson),
            JsonValidity::Malformed(message) => Err(SaveError::MalformedJson(message)),
        }
    }
}

/// Check JSON syntax.
pub fn validate_json(json: &str) -> JsonValidity {
    if json.trim().is_empty() {
        return JsonValidity::Empty;
    }

    match check_syntax(json) {
        Ok(()) => JsonValidity::Valid,
        Err(e) => JsonValidity::Malformed(e.to_string()),
    }
}

fn check_syntax(json: &str) -> Result<(), serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();

    IgnoredAny::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()
}

/// Quick check: `true` only for syntactically valid JSON.
pub fn is_valid_json(json: &str) -> bool {
    validate_json(json).is_valid()
}
