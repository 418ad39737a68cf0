//! REST API types.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::transform::pipeline::Conversion;
use crate::validation::JsonValidity;

/// Response sent after a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    /// Status: "ready" or "warning" (some rows shorter than the header)
    pub status: String,

    /// Pretty-printed JSON, ready to save as-is
    pub json: String,

    /// Metadata about the conversion
    pub metadata: CsvMetadata,
}

/// CSV metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvMetadata {
    /// Text encoding of an uploaded file, if one was decoded
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub encoding: Option<String>,
    pub row_count: usize,
    pub columns: Vec<String>,
    pub short_rows: usize,
}

impl From<Conversion> for ConvertResponse {
    fn from(result: Conversion) -> Self {
        let info = result.csv_info;

        ConvertResponse {
            status: if info.short_rows == 0 { "ready" } else { "warning" }.to_string(),
            json: result.json,
            metadata: CsvMetadata {
                encoding: None,
                row_count: info.row_count,
                columns: info.headers,
                short_rows: info.short_rows,
            },
        }
    }
}

impl ConvertResponse {
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.metadata.encoding = Some(encoding.into());
        self
    }
}

/// Response of the JSON validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    /// "valid", "empty" or "malformed"
    pub status: String,
    /// User-facing message, absent when valid
    pub message: Option<String>,
}

impl From<JsonValidity> for ValidateResponse {
    fn from(validity: JsonValidity) -> Self {
        let status = validity.label().to_string();
        let message = validity.into_result().err().map(|e| e.to_string());

        ValidateResponse { status, message }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::convert_csv;
    use crate::validation::validate_json;

    #[test]
    fn test_convert_response_wire_format() {
        let response = ConvertResponse::from(convert_csv("a,b\n1,2\n").unwrap());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "ready");
        assert_eq!(value["metadata"]["rowCount"], 1);
        assert_eq!(value["metadata"]["columns"], json!(["a", "b"]));
        assert!(value["metadata"].get("encoding").is_none());
    }

    #[test]
    fn test_warning_on_short_rows() {
        let response = ConvertResponse::from(convert_csv("a,b\n1\n").unwrap())
            .with_encoding("UTF-8");

        assert_eq!(response.status, "warning");
        assert_eq!(response.metadata.encoding.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn test_validate_response() {
        let valid = ValidateResponse::from(validate_json("{}"));
        assert_eq!(valid.status, "valid");
        assert!(valid.message.is_none());

        let empty = ValidateResponse::from(validate_json(""));
        assert_eq!(empty.status, "empty");
        assert_eq!(empty.message.as_deref(), Some("JSON is empty!"));

        let malformed = ValidateResponse::from(validate_json("{"));
        assert_eq!(malformed.status, "malformed");
        assert!(malformed.message.unwrap().starts_with("Invalid JSON!"));
    }

    #[test]
    fn test_error_response() {
        let value = error_response("Invalid CSV!");
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "Invalid CSV!");
    }
}
