//! Browser implementation of the converter's file services.
//!
//! Reading takes the raw bytes of the file chosen in the hidden file input
//! and decodes them with the same encoding detection as the CLI, so Latin-1
//! exports load intact. Saving builds a Blob, points a temporary anchor at
//! its object URL and clicks it so the browser downloads it under the
//! suggested name.

use csvjson::error::{HostError, HostResult};
use csvjson::{decode_text, FileHost, HostFile};
use gloo_timers::callback::Timeout;
use js_sys::{Array, ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::config::REVOKE_URL_DELAY_MS;

/// File services backed by browser APIs.
#[derive(Clone, Default)]
pub struct BrowserHost {
    /// File picked by the user, if any
    file: Option<File>,
}

impl BrowserHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose `read_file` delivers `file`.
    pub fn with_file(file: File) -> Self {
        Self { file: Some(file) }
    }
}

fn js_error(err: JsValue) -> HostError {
    HostError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

/// Turn the raw contents of a picked file into a [`HostFile`].
pub fn decode_file(name: String, bytes: &[u8]) -> HostFile {
    let decoded = decode_text(bytes);
    log::debug!("Read {} ({} bytes, {})", name, bytes.len(), decoded.encoding);

    HostFile {
        name,
        text: decoded.text,
    }
}

impl FileHost for BrowserHost {
    async fn read_file(&self) -> HostResult<HostFile> {
        // No file means the picker was dismissed
        let file = self.file.as_ref().ok_or(HostError::Cancelled)?;

        let contents = JsFuture::from(file.array_buffer())
            .await
            .map_err(js_error)?;
        let buffer: ArrayBuffer = contents
            .dyn_into()
            .map_err(|_| HostError::Unavailable("file contents are not binary".into()))?;
        let bytes = Uint8Array::new(&buffer).to_vec();

        Ok(decode_file(file.name(), &bytes))
    }

    async fn save_file(&self, name: &str, mime: &str, bytes: &[u8]) -> HostResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| HostError::Unavailable("no browser window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| HostError::Unavailable("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| HostError::Unavailable("no document body".into()))?;

        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));

        let options = BlobPropertyBag::new();
        options.set_type(mime);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| HostError::Unavailable("cannot create download link".into()))?;

        anchor.set_href(&url);
        anchor.set_download(name);

        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        anchor.remove();

        // The download starts asynchronously; keep the URL alive until then
        Timeout::new(REVOKE_URL_DELAY_MS, move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::warn!("Could not revoke download URL: {:?}", e);
            }
        })
        .forget();

        log::info!("Saved {} ({} bytes)", name, bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_file_keeps_name() {
        let file = decode_file("people.csv".to_string(), "name\nZoé\n".as_bytes());

        assert_eq!(file.name, "people.csv");
        assert_eq!(file.text, "name\nZoé\n");
    }

    #[test]
    fn test_decode_file_honours_bom() {
        // UTF-16LE "a,b" with its byte-order mark
        let bytes = [0xFF, 0xFE, b'a', 0x00, b',', 0x00, b'b', 0x00];
        let file = decode_file("wide.csv".to_string(), &bytes);

        assert_eq!(file.text, "a,b");
    }

    #[test]
    fn test_decode_file_non_utf8() {
        // "Société" in ISO-8859-1
        let bytes = [0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let file = decode_file("latin1.csv".to_string(), &bytes);

        assert_eq!(file.name, "latin1.csv");
        assert!(file.text.starts_with("Soci"));
    }
}
