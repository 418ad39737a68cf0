//! Converter configuration.
//!
//! Fixed values shared by every host (browser, CLI, HTTP API) live here as
//! constants. Runtime settings for the native binary come from the
//! environment, optionally seeded from a `.env` file.

use std::path::PathBuf;

/// File name suggested when saving the JSON buffer.
pub const DOWNLOAD_FILE_NAME: &str = "download.json";

/// MIME type of the saved JSON file.
pub const JSON_MIME_TYPE: &str = "application/json; charset=utf-8";

/// Text written into the JSON buffer when the CSV is rejected.
pub const INVALID_CSV_MESSAGE: &str = "Invalid CSV!";

/// Notification shown when saving an empty JSON buffer.
pub const EMPTY_JSON_MESSAGE: &str = "JSON is empty!";

/// Notification prefix shown when saving unparsable JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON!";

/// File contents the host may deliver when a read produced nothing usable.
/// Such contents never replace the CSV buffer.
pub const UNDEFINED_SENTINEL: &str = "undefined";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Maximum accepted upload size (in bytes).
///
/// 10 MB limit. Conversion is in-memory and synchronous.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Environment variable overriding the HTTP port.
pub const PORT_VAR: &str = "CSVJSON_PORT";

/// Environment variable overriding the directory saved files go to.
pub const SAVE_DIR_VAR: &str = "CSVJSON_SAVE_DIR";

/// Runtime configuration for the native binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP API listens on
    pub port: u16,
    /// Directory `save_json` writes into when no explicit output is given
    pub save_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            save_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup(PORT_VAR)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.port);

        let save_dir = lookup(SAVE_DIR_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.save_dir);

        Self { port, save_dir }
    }
}
