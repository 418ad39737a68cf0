//! Converter session state and user operations.
//!
//! [`ConverterState`] holds the two text buffers and the file selection.
//! UI adapters render it and translate user events into the operations
//! below; nothing here touches a UI toolkit.
//!
//! | Operation | Effect |
//! |---|---|
//! | [`ConverterState::convert`] | CSV buffer to JSON buffer, or `Invalid CSV!` in error display |
//! | [`ConverterState::clear`] | Empty both buffers and the file selection |
//! | [`ConverterState::load_csv_from_text`] | Replace the CSV buffer unless the text is `undefined` |
//! | [`ConverterState::save_json`] | Validate the JSON buffer, then ask the host to save it |
//!
//! # Example
//!
//! ```
//! use csvjson::ConverterState;
//!
//! let mut state = ConverterState::new();
//! state.load_csv_from_text("name,age\nAda,36\n");
//! state.convert().unwrap();
//!
//! assert!(state.json_text.contains("\"name\": \"Ada\""));
//! assert!(!state.json_error);
//! ```

use crate::api::logs::{log_error, log_info, log_warning};
use crate::config::{DOWNLOAD_FILE_NAME, INVALID_CSV_MESSAGE, JSON_MIME_TYPE, UNDEFINED_SENTINEL};
use crate::error::{ConvertError, ConvertResult, HostError, HostResult, SaveError, SaveResult};
use crate::host::{FileHost, HostFile};
use crate::transform::pipeline::{convert_csv, CsvInfo};
use crate::validation::{validate_json, JsonValidity};

/// Outcome of loading a file into the CSV buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The CSV buffer now holds the file contents.
    Loaded,
    /// The contents were the `undefined` sentinel; the buffer is unchanged.
    Ignored,
    /// The user dismissed the file picker; nothing changed.
    Cancelled,
}

/// Outcome of a save request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The host persisted the file.
    Saved,
    /// The user dismissed the save dialog.
    Cancelled,
}

/// UI-independent converter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    /// CSV buffer
    pub csv_text: String,
    /// JSON buffer
    pub json_text: String,
    /// JSON buffer shows an error message rather than JSON
    pub json_error: bool,
    /// Name of the file last selected for loading
    pub selected_file_name: Option<String>,
}

impl ConverterState {
    /// Empty buffers, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert the CSV buffer into the JSON buffer.
    ///
    /// On success the JSON buffer is replaced and leaves error display. When
    /// the CSV shape check fails the JSON buffer is set to `Invalid CSV!` in
    /// error display and [`ConvertError::InvalidCsv`] is returned; the
    /// caller has nothing else to do.
    pub fn convert(&mut self) -> ConvertResult<CsvInfo> {
        match convert_csv(&self.csv_text) {
            Ok(conversion) => {
                self.reset_json();
                self.json_text = conversion.json;
                Ok(conversion.csv_info)
            }
            Err(ConvertError::InvalidCsv) => {
                self.json_error = true;
                self.json_text = INVALID_CSV_MESSAGE.to_string();
                Err(ConvertError::InvalidCsv)
            }
            Err(e) => Err(e),
        }
    }

    /// Reset both buffers and the file selection.
    pub fn clear(&mut self) {
        self.csv_text.clear();
        self.reset_json();
        self.selected_file_name = None;
    }

    /// Replace the CSV buffer with text delivered by the host.
    ///
    /// Returns `false` and keeps the buffer when the text is the
    /// `undefined` sentinel.
    pub fn load_csv_from_text(&mut self, text: &str) -> bool {
        if text == UNDEFINED_SENTINEL {
            log_warning("File contents unavailable; CSV left unchanged");
            return false;
        }

        self.csv_text = text.to_string();
        true
    }

    /// Record the selected file and load its contents.
    pub fn load_csv_file(&mut self, file: HostFile) -> LoadOutcome {
        log_info(format!("Loading {}", file.name));
        self.selected_file_name = Some(file.name);

        if self.load_csv_from_text(&file.text) {
            LoadOutcome::Loaded
        } else {
            LoadOutcome::Ignored
        }
    }

    /// Ask the host for a file and load it into the CSV buffer.
    ///
    /// A cancelled picker leaves the state untouched.
    pub async fn open_csv<H: FileHost>(&mut self, host: &H) -> HostResult<LoadOutcome> {
        match host.read_file().await {
            Ok(file) => Ok(self.load_csv_file(file)),
            Err(HostError::Cancelled) => Ok(LoadOutcome::Cancelled),
            Err(e) => {
                log_error(format!("Could not read file: {}", e));
                Err(e)
            }
        }
    }

    /// Check the JSON buffer syntax.
    pub fn validate_json(&self) -> JsonValidity {
        validate_json(&self.json_text)
    }

    /// Validate the JSON buffer and ask the host to save it as
    /// `download.json` (`application/json; charset=utf-8`).
    ///
    /// Invalid JSON is never handed to the host: the returned error's
    /// `Display` is the notification to show.
    pub async fn save_json<H: FileHost>(&self, host: &H) -> SaveResult<SaveOutcome> {
        if let Err(e) = self.validate_json().into_result() {
            log_error(e.to_string());
            return Err(e);
        }

        match host
            .save_file(DOWNLOAD_FILE_NAME, JSON_MIME_TYPE, self.json_text.as_bytes())
            .await
        {
            Ok(()) => Ok(SaveOutcome::Saved),
            Err(HostError::Cancelled) => Ok(SaveOutcome::Cancelled),
            Err(e) => {
                log_error(format!("Could not save file: {}", e));
                Err(SaveError::Host(e))
            }
        }
    }

    fn reset_json(&mut self) {
        self.json_text.clear();
        self.json_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Saved file: name, MIME type, contents.
    type SavedFile = (String, String, Vec<u8>);

    #[derive(Default)]
    struct MockHost {
        file: Option<HostFile>,
        read_failure: Option<String>,
        cancel_save: bool,
        saved: RefCell<Vec<SavedFile>>,
    }

    impl FileHost for MockHost {
        async fn read_file(&self) -> HostResult<HostFile> {
            if let Some(message) = &self.read_failure {
                return Err(HostError::Unavailable(message.clone()));
            }
            self.file.clone().ok_or(HostError::Cancelled)
        }

        async fn save_file(&self, name: &str, mime: &str, bytes: &[u8]) -> HostResult<()> {
            if self.cancel_save {
                return Err(HostError::Cancelled);
            }
            self.saved
                .borrow_mut()
                .push((name.to_string(), mime.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    fn host_with_file(name: &str, text: &str) -> MockHost {
        MockHost {
            file: Some(HostFile {
                name: name.to_string(),
                text: text.to_string(),
            }),
            ..MockHost::default()
        }
    }

    #[test]
    fn test_convert_replaces_json_buffer() {
        let mut state = ConverterState::new();
        state.csv_text = "a,b\n1,2\n".to_string();
        state.json_text = "stale".to_string();

        let info = state.convert().unwrap();

        assert_eq!(info.row_count, 1);
        assert_eq!(state.json_text, "[\n  {\n    \"a\": \"1\",\n    \"b\": \"2\"\n  }\n]");
        assert!(!state.json_error);
    }

    #[test]
    fn test_convert_invalid_csv_shows_message() {
        let mut state = ConverterState::new();
        state.csv_text = "only,a,header".to_string();
        state.json_text = "[]".to_string();

        let result = state.convert();

        assert!(matches!(result, Err(ConvertError::InvalidCsv)));
        assert_eq!(state.json_text, "Invalid CSV!");
        assert!(state.json_error);
        assert_eq!(state.csv_text, "only,a,header");
    }

    #[test]
    fn test_successful_convert_leaves_error_display() {
        let mut state = ConverterState::new();
        let _ = state.convert();
        assert!(state.json_error);

        state.csv_text = "a\n1\n".to_string();
        state.convert().unwrap();

        assert!(!state.json_error);
        assert!(state.json_text.starts_with('['));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = ConverterState {
            csv_text: "a,b".to_string(),
            json_text: "Invalid CSV!".to_string(),
            json_error: true,
            selected_file_name: Some("data.csv".to_string()),
        };

        state.clear();

        assert_eq!(state, ConverterState::default());
    }

    #[test]
    fn test_load_ignores_undefined_sentinel() {
        let mut state = ConverterState::new();
        state.csv_text = "kept".to_string();

        assert!(!state.load_csv_from_text("undefined"));
        assert_eq!(state.csv_text, "kept");

        assert!(state.load_csv_from_text("x,y\n1,2"));
        assert_eq!(state.csv_text, "x,y\n1,2");

        assert!(state.load_csv_from_text(""));
        assert_eq!(state.csv_text, "");
    }

    #[tokio::test]
    async fn test_open_csv_loads_and_selects() {
        let mut state = ConverterState::new();
        let host = host_with_file("people.csv", "name\nAda\n");

        let outcome = state.open_csv(&host).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(state.csv_text, "name\nAda\n");
        assert_eq!(state.selected_file_name.as_deref(), Some("people.csv"));
    }

    #[tokio::test]
    async fn test_open_csv_sentinel_keeps_buffer() {
        let mut state = ConverterState::new();
        state.csv_text = "previous".to_string();
        let host = host_with_file("odd.csv", "undefined");

        let outcome = state.open_csv(&host).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Ignored);
        assert_eq!(state.csv_text, "previous");
        assert_eq!(state.selected_file_name.as_deref(), Some("odd.csv"));
    }

    #[tokio::test]
    async fn test_open_csv_cancelled_changes_nothing() {
        let mut state = ConverterState::new();
        state.csv_text = "previous".to_string();
        let before = state.clone();

        let outcome = state.open_csv(&MockHost::default()).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Cancelled);
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_open_csv_failure_propagates() {
        let mut state = ConverterState::new();
        let host = MockHost {
            read_failure: Some("disk on fire".to_string()),
            ..MockHost::default()
        };

        let err = state.open_csv(&host).await.unwrap_err();

        assert!(err.to_string().contains("disk on fire"));
        assert_eq!(state, ConverterState::default());
    }

    #[tokio::test]
    async fn test_save_json_writes_download() {
        let mut state = ConverterState::new();
        state.csv_text = "a\n1\n".to_string();
        state.convert().unwrap();
        let host = MockHost::default();

        let outcome = state.save_json(&host).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        let saved = host.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "download.json");
        assert_eq!(saved[0].1, "application/json; charset=utf-8");
        assert_eq!(saved[0].2, state.json_text.as_bytes());
    }

    #[tokio::test]
    async fn test_save_json_empty_is_not_written() {
        let state = ConverterState::new();
        let host = MockHost::default();

        let err = state.save_json(&host).await.unwrap_err();

        assert!(matches!(err, SaveError::EmptyJson));
        assert_eq!(err.to_string(), "JSON is empty!");
        assert!(host.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_save_json_malformed_is_not_written() {
        let mut state = ConverterState::new();
        let _ = state.convert();
        let host = MockHost::default();

        // The buffer holds "Invalid CSV!" which is not JSON
        let err = state.save_json(&host).await.unwrap_err();

        assert!(matches!(err, SaveError::MalformedJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON! \n\n"));
        assert!(host.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_save_json_cancelled() {
        let state = ConverterState {
            json_text: "{\"edited\": true}".to_string(),
            ..ConverterState::default()
        };
        let host = MockHost {
            cancel_save: true,
            ..MockHost::default()
        };

        assert_eq!(state.save_json(&host).await.unwrap(), SaveOutcome::Cancelled);
    }
}
