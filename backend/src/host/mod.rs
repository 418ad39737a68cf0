//! Injected file services.
//!
//! The converter never talks to a file picker or a save dialog directly.
//! Hosts (the browser frontend, the CLI) implement [`FileHost`] and the
//! session calls it, so conversion logic is testable without any UI.
//!
//! A dismissed dialog is reported as [`HostError::Cancelled`]; callers
//! treat it as "nothing happened" rather than as a failure.

pub mod encoding;
#[cfg(feature = "cli")]
pub mod fs;

pub use encoding::{decode_text, detect_encoding, DecodedText};
#[cfg(feature = "cli")]
pub use fs::FsHost;

use crate::error::HostResult;

/// A file delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFile {
    /// File name as selected by the user, without directories
    pub name: String,
    /// Decoded text contents
    pub text: String,
}

/// Asynchronous file services provided by the surrounding environment.
///
/// Both operations are single-shot: they complete with a result or fail
/// with [`HostError::Cancelled`](crate::error::HostError::Cancelled) when
/// the user abandons the dialog.
#[allow(async_fn_in_trait)]
pub trait FileHost {
    /// Let the user pick a file and read its text.
    async fn read_file(&self) -> HostResult<HostFile>;

    /// Persist `bytes` under the suggested file name with the given MIME type.
    async fn save_file(&self, name: &str, mime: &str, bytes: &[u8]) -> HostResult<()>;
}
