//! Product image uploads.
//!
//! Uploaded files are written straight to the configured upload directory
//! and served back via `ServeDir` under `/uploads/`. No resizing or
//! content inspection happens server-side.

use std::path::PathBuf;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

/// Errors that can occur when storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Writing the file failed.
    #[error("failed to write upload: {0}")]
    Io(#[from] std::io::Error),

    /// Client sent a file part with no content.
    #[error("uploaded file is empty")]
    Empty,
}

/// Stores uploaded product images on disk.
#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    /// Create an upload service rooted at `dir`.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Ensure the upload directory exists.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write an uploaded image and return its public URL path.
    ///
    /// Filenames are prefixed with the upload timestamp plus a random
    /// suffix so two uploads of the same file never collide.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Empty` for zero-length uploads and
    /// `UploadError::Io` if the write fails.
    pub async fn save_image(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, UploadError> {
        if data.is_empty() {
            return Err(UploadError::Empty);
        }

        let suffix: u16 = rand::rng().random();
        let filename = format!(
            "{}-{:04x}-{}",
            Utc::now().timestamp_millis(),
            suffix,
            sanitize_filename(original_name)
        );

        tokio::fs::write(self.dir.join(&filename), data).await?;

        Ok(format!("/uploads/{filename}"))
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path separators and anything outside `[A-Za-z0-9._-]` become `_`, so a
/// name like `../../etc/passwd` cannot escape the upload directory.
fn sanitize_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.is_empty() {
        "upload".to_string()
    } else {
        safe
    }
}
