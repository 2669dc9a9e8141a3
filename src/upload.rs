//! Filename sanitization and the transient upload file guard

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Reduce a client-supplied filename to a form that is safe to use on disk
///
/// Keeps only the final path segment, replaces anything outside
/// `[A-Za-z0-9._-]` with underscores, and strips leading dots, so the result
/// can never escape the upload directory or hide as a dotfile. May return an
/// empty string for degenerate inputs; callers pair it with a unique prefix.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// A transient upload file, removed when the guard is dropped
///
/// The file exists only to relay bytes to the vision model; dropping the
/// guard deletes it, so cleanup runs on every exit path of the owning
/// request, including early error returns and panics.
pub struct TransientUpload {
    path: PathBuf,
}

impl TransientUpload {
    /// Write `data` under `upload_dir`, creating the directory if missing
    ///
    /// The on-disk name is the sanitized client filename prefixed with a
    /// per-request UUID, so concurrent uploads of the same name cannot
    /// read each other's bytes.
    pub async fn write(
        upload_dir: &Path,
        client_filename: &str,
        data: &[u8],
    ) -> io::Result<Self> {
        tokio::fs::create_dir_all(upload_dir).await?;

        let filename = format!("{}-{}", Uuid::new_v4(), sanitize_filename(client_filename));
        let path = upload_dir.join(filename);
        tokio::fs::write(&path, data).await?;
        tracing::info!(path = %path.display(), "Image saved temporarily");

        Ok(Self { path })
    }

    /// Path of the file on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Cleaned up temporary file");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary file"
                );
            }
        }
    }
}
