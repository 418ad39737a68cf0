//! HTTP Server for the converter API.
//!
//! Exposes the conversion and validation core to remote callers.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                          |
//! |--------|-------------------|--------------------------------------|
//! | GET    | `/health`         | Health check                         |
//! | POST   | `/api/convert`    | Convert a CSV body to JSON           |
//! | POST   | `/api/upload`     | Convert an uploaded CSV file         |
//! | POST   | `/api/validate`   | Check a JSON body                    |
//! | GET    | `/api/logs`       | SSE stream for real-time logs        |

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{header, Method, StatusCode},
    response::{sse::Event, IntoResponse, Json, Response, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_info, LOG_BROADCASTER};
use super::types::{error_response, ConvertResponse, ValidateResponse};
use crate::config::{Config, MAX_UPLOAD_SIZE};
use crate::error::{ConvertError, ServerError, ServerResult};
use crate::host::decode_text;
use crate::transform::pipeline::convert_csv;
use crate::validation::validate_json;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Convert(ConvertError::InvalidCsv) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Convert(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The conversion message is user-facing as is
        let message = match &self {
            ServerError::Convert(e) => e.to_string(),
            other => other.to_string(),
        };

        (status, Json(error_response(&message))).into_response()
    }
}

/// Build the API router
pub fn router() -> Router {
    // Permissive CORS so a page served elsewhere can call the API
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/convert", post(convert))
        .route("/api/upload", post(upload_csv))
        .route("/api/validate", post(validate))
        .route("/api/logs", get(sse_logs))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: &Config) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    eprintln!("🚀 csvjson server running on http://localhost:{}", config.port);
    eprintln!("   POST /api/convert  - Convert CSV text");
    eprintln!("   POST /api/upload   - Convert CSV file");
    eprintln!("   POST /api/validate - Validate JSON text");
    eprintln!("   GET  /api/logs     - SSE log stream");
    eprintln!("   GET  /health       - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Internal(format!("Cannot bind {}: {}", addr, e)))?;

    axum::serve(listener, router())
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "csvjson",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "convert": "POST /api/convert",
            "upload": "POST /api/upload",
            "validate": "POST /api/validate",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        // Lagged receivers skip what they missed
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Convert CSV text posted as the request body
async fn convert(body: String) -> ServerResult<Json<ConvertResponse>> {
    let result = convert_csv(&body)?;
    Ok(Json(result.into()))
}

/// Upload CSV endpoint
async fn upload_csv(mut multipart: Multipart) -> ServerResult<Json<ConvertResponse>> {
    let mut file_data = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ServerError::BadRequest(format!("Read error: {}", e)))?,
            );
        }
    }

    let bytes = file_data.ok_or_else(|| ServerError::BadRequest("No file provided".into()))?;

    log_info(format!(
        "Upload: {} ({} bytes)",
        file_name.as_deref().unwrap_or("unknown"),
        bytes.len()
    ));

    let decoded = decode_text(&bytes);
    let result = convert_csv(&decoded.text)?;

    Ok(Json(ConvertResponse::from(result).with_encoding(decoded.encoding)))
}

/// Validate JSON text posted as the request body
async fn validate(body: String) -> Json<ValidateResponse> {
    Json(validate_json(&body).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_handler() {
        let Json(response) = convert("a,b\n1,2\n".to_string()).await.unwrap();

        assert_eq!(response.status, "ready");
        assert_eq!(response.metadata.row_count, 1);
        assert!(response.json.contains("\"b\": \"2\""));
    }

    #[tokio::test]
    async fn test_convert_handler_rejects_shape() {
        let err = convert("a,b".to_string()).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_validate_handler() {
        let Json(response) = validate("{".to_string()).await;
        assert_eq!(response.status, "malformed");

        let Json(response) = validate(String::new()).await;
        assert_eq!(response.status, "empty");
    }

    #[tokio::test]
    async fn test_health() {
        let Json(value) = health().await;
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "csvjson");
    }

    #[test]
    fn test_bad_request_status() {
        let response = ServerError::BadRequest("No file provided".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
