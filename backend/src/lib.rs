//! # csvjson - CSV to JSON conversion and validation
//!
//! csvjson turns CSV text into a pretty-printed JSON array of objects, one
//! per data row, keyed by the header row. It backs a browser converter
//! (see the `frontend` crate), a command line tool and a small HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV text   │────▶│ Shape check │────▶│   Parser    │────▶│   Mapper    │──▶ JSON text
//! │  (buffer)   │     │   (regex)   │     │  (Table)    │     │ (by header) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use csvjson::{convert_csv, is_valid_json};
//!
//! let result = convert_csv("name,age\nAlice,30\n").unwrap();
//! assert!(is_valid_json(&result.json));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Constants and runtime configuration
//! - [`parser`] - Line-oriented CSV parsing
//! - [`transform`] - Table mapping and conversion pipeline
//! - [`validation`] - CSV shape and JSON syntax checks
//! - [`session`] - Converter state and user operations
//! - [`host`] - Injected file read/save services
//! - [`api`] - HTTP API, response types and log streaming

// Core modules
pub mod config;
pub mod error;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// State and operations
pub mod session;

// File services
pub mod host;

// HTTP API and logs
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, HostError, SaveError, ServerError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{Config, DOWNLOAD_FILE_NAME, JSON_MIME_TYPE};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{parse_csv, parse_line, Row, Table};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    convert_csv,
    table_to_json,
    table_to_records,
    Conversion,
    CsvInfo,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid_csv, is_valid_json, validate_json, JsonValidity};

// =============================================================================
// Re-exports - Session
// =============================================================================

pub use session::{ConverterState, LoadOutcome, SaveOutcome};

// =============================================================================
// Re-exports - Host services
// =============================================================================

pub use host::{decode_text, FileHost, HostFile};

#[cfg(feature = "cli")]
pub use host::FsHost;

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, ConvertResponse, CsvMetadata, ValidateResponse};
pub use api::logs::{LogEntry, LogLevel, LOG_BROADCASTER};

// Server
#[cfg(feature = "cli")]
pub mod server {
    pub use crate::api::server::{router, start_server};
}
