//! Persisting uploaded images to the local upload directory.

use std::path::Path;

use chrono::Utc;
use shelf_core::upload_naming::stored_filename;

use crate::form::UploadedFile;

/// Write `file` into `dir` under a timestamp-derived name and return that name.
///
/// The directory is created on first use. Names are only unique per
/// millisecond; a second upload in the same millisecond with the same
/// extension replaces the first file.
pub async fn persist_image(dir: &Path, file: &UploadedFile) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = stored_filename(&file.original_name, Utc::now());
    tokio::fs::write(dir.join(&filename), &file.data).await?;

    tracing::info!(
        filename = %filename,
        original = %file.original_name,
        bytes = file.data.len(),
        "Stored uploaded image",
    );
    Ok(filename)
}
