//! Photo storage for animal listings.
//!
//! Uploaded images are written to `{public_dir}/uploads/` and served back by
//! the static file service at `{public_url}/public/uploads/{file}`.
//!
//! File names are `{unix_millis}-{nanoid}.{ext}`: ordered by upload time,
//! with a random suffix so two uploads in the same millisecond do not collide.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::Config;
use crate::services::forms::UploadedPhoto;
use crate::{Error, Result};

/// URL path prefix under which uploads are served.
pub const UPLOADS_ROUTE: &str = "/public/uploads";

/// Writes uploaded photos to disk and builds their public URLs.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    uploads_dir: PathBuf,
    public_url: String,
    max_size: usize,
}

impl PhotoStorage {
    pub fn new(config: &Config) -> Self {
        Self {
            uploads_dir: config.storage.uploads_dir(),
            public_url: config.server.public_url.trim_end_matches('/').to_string(),
            max_size: config.storage.max_upload_size,
        }
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.uploads_dir)
            .await
            .map_err(|e| Error::Internal(format!("Failed to create upload directory: {}", e)))
    }

    /// Absolute URL clients use to fetch a stored file.
    pub fn public_url_for(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.public_url, UPLOADS_ROUTE, file_name)
    }

    /// Validate and write one photo, returning its public URL.
    pub async fn store(&self, photo: &UploadedPhoto) -> Result<String> {
        if photo.data.is_empty() {
            return Err(Error::Validation("Empty file".into()));
        }

        if photo.data.len() > self.max_size {
            return Err(Error::Validation(format!(
                "File too large: max {} bytes",
                self.max_size
            )));
        }

        let content_type = resolve_content_type(photo).ok_or_else(|| {
            Error::Validation(format!(
                "Not an image: {}",
                photo.content_type.as_deref().unwrap_or("unknown type")
            ))
        })?;

        let file_name = generate_file_name(
            photo
                .file_name
                .as_deref()
                .and_then(get_file_extension)
                .or_else(|| extension_for_mime(&content_type))
                .as_deref(),
        );

        let full_path = self.uploads_dir.join(&file_name);
        tokio::fs::write(&full_path, &photo.data)
            .await
            .map_err(|e| Error::Internal(format!("Failed to write file: {}", e)))?;

        tracing::debug!(
            "Stored photo {} ({} bytes, {})",
            file_name,
            photo.data.len(),
            content_type
        );
        Ok(self.public_url_for(&file_name))
    }

    /// Store every photo, skipping the ones that fail.
    ///
    /// A rejected or unwritable file is logged and left out of the result.
    pub async fn store_all(&self, photos: &[UploadedPhoto]) -> Vec<String> {
        let mut urls = Vec::with_capacity(photos.len());
        for photo in photos {
            match self.store(photo).await {
                Ok(url) => urls.push(url),
                Err(e) => tracing::warn!(
                    "Skipping photo {}: {}",
                    photo.file_name.as_deref().unwrap_or("unnamed"),
                    e
                ),
            }
        }
        urls
    }
}

/// The image MIME type of an upload, from its declared type or its file name.
fn resolve_content_type(photo: &UploadedPhoto) -> Option<String> {
    let declared = photo
        .content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase())
        .filter(|ct| ct != "application/octet-stream");

    let content_type = match declared {
        Some(ct) => ct,
        None => mime_guess::from_path(photo.file_name.as_deref()?)
            .first()?
            .essence_str()
            .to_string(),
    };

    content_type.starts_with("image/").then_some(content_type)
}

/// Get file extension from filename.
fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

fn extension_for_mime(content_type: &str) -> Option<String> {
    let extensions = mime_guess::get_mime_extensions_str(content_type)?;
    // Prefer the common spelling for JPEG over jfif/jpe.
    extensions
        .iter()
        .find(|ext| **ext == "jpg")
        .or_else(|| extensions.first())
        .map(|ext| ext.to_string())
}

fn generate_file_name(extension: Option<&str>) -> String {
    let stem = format!("{}-{}", Utc::now().timestamp_millis(), nanoid::nanoid!(6));
    match extension {
        Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext),
        _ => stem,
    }
}
