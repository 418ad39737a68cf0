//! Filesystem-backed [`FileHost`] for the command line.
//!
//! The "selected file" is the input path given on the command line, and the
//! save dialog writes either to an explicit output path or into the save
//! directory under the suggested name. Refusing to overwrite an existing
//! file plays the part of the user cancelling the dialog.

use std::path::{Path, PathBuf};

use super::encoding::decode_text;
use super::{FileHost, HostFile};
use crate::api::logs::log_info;
use crate::error::{HostError, HostResult};

/// File host reading and writing local files.
#[derive(Debug, Clone)]
pub struct FsHost {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    save_dir: PathBuf,
    overwrite: bool,
}

impl FsHost {
    /// Host saving into `save_dir`, with no input selected yet.
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: None,
            output: None,
            save_dir: save_dir.into(),
            overwrite: false,
        }
    }

    /// Select the file `read_file` delivers.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Save to this exact path instead of the suggested name.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Allow replacing existing files.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Where a file saved under `name` ends up.
    pub fn target(&self, name: &str) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.save_dir.join(name),
        }
    }
}

impl FileHost for FsHost {
    async fn read_file(&self) -> HostResult<HostFile> {
        let path = self.input.as_deref().ok_or(HostError::Cancelled)?;
        let bytes = tokio::fs::read(path).await?;
        let decoded = decode_text(&bytes);

        log_info(format!(
            "Read {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            decoded.encoding
        ));

        Ok(HostFile {
            name: file_name(path),
            text: decoded.text,
        })
    }

    async fn save_file(&self, name: &str, _mime: &str, bytes: &[u8]) -> HostResult<()> {
        let target = self.target(name);

        if !self.overwrite && tokio::fs::try_exists(&target).await? {
            return Err(HostError::Cancelled);
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&target, bytes).await?;
        log_info(format!("Wrote {} ({} bytes)", target.display(), bytes.len()));

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_selected_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "name\nAda\n").unwrap();

        let host = FsHost::new(dir.path()).with_input(&input);
        let file = host.read_file().await.unwrap();

        assert_eq!(file.name, "people.csv");
        assert_eq!(file.text, "name\nAda\n");
    }

    #[tokio::test]
    async fn test_read_without_selection_is_cancelled() {
        let host = FsHost::new(".");

        assert!(host.read_file().await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let host = FsHost::new(dir.path()).with_input(dir.path().join("nope.csv"));

        assert!(matches!(host.read_file().await, Err(HostError::Io(_))));
    }

    #[tokio::test]
    async fn test_save_into_save_dir() {
        let dir = tempdir().unwrap();
        let host = FsHost::new(dir.path().join("out"));

        host.save_file("download.json", "application/json", b"[]")
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/download.json")).unwrap();
        assert_eq!(written, "[]");
    }

    #[tokio::test]
    async fn test_existing_target_cancels_unless_overwrite() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("result.json");
        std::fs::write(&output, "old").unwrap();

        let host = FsHost::new(dir.path()).with_output(&output);
        let err = host.save_file("download.json", "", b"new").await.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "old");

        let host = host.overwrite(true);
        host.save_file("download.json", "", b"new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "new");
    }
}
