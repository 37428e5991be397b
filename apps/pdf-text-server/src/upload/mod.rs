//! Upload handling
//!
//! Validates uploaded filenames and persists upload bytes to
//! request-scoped temporary files that are removed when the request ends.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};
use thiserror::Error;

/// Upload persistence errors
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to create temporary file: {source}")]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write temporary file: {0}")]
    Write(#[from] std::io::Error),
}

/// Check that a filename carries the `.pdf` extension (ASCII case-insensitive)
pub fn is_pdf_filename(filename: &str) -> bool {
    let suffix = ".pdf";
    filename.len() >= suffix.len()
        && filename.is_char_boundary(filename.len() - suffix.len())
        && filename[filename.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Temporary file owned by a single request
///
/// The file is deleted by `release`, or by `Drop` if the guard goes out of
/// scope first. Deletion failures are logged and never returned.
#[derive(Debug)]
pub struct ScopedUpload {
    path: PathBuf,
    temp: Option<TempPath>,
}

impl ScopedUpload {
    /// Write `data` to a fresh uniquely named file in `dir`
    pub fn persist(dir: &Path, data: &[u8]) -> Result<Self, UploadError> {
        let mut file = Builder::new()
            .prefix("upload-")
            .suffix(".pdf")
            .tempfile_in(dir)
            .map_err(|source| {
                tracing::error!(dir = %dir.display(), error = %source, "Failed to create temporary file");
                UploadError::Create {
                    dir: dir.to_path_buf(),
                    source,
                }
            })?;

        file.write_all(data)?;
        file.flush()?;

        let temp = file.into_temp_path();
        let path = temp.to_path_buf();
        tracing::debug!(path = %path.display(), bytes = data.len(), "Saved upload to temporary file");

        Ok(Self {
            path,
            temp: Some(temp),
        })
    }

    /// Path of the temporary file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the temporary file now
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let Some(temp) = self.temp.take() {
            match temp.close() {
                Ok(()) => tracing::info!(path = %self.path.display(), "Temporary file deleted"),
                Err(e) => tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to delete temporary file"
                ),
            }
        }
    }
}

impl Drop for ScopedUpload {
    fn drop(&mut self) {
        self.remove();
    }
}
