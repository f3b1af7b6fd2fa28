use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const PDF_MIME_TYPE: &str = "application/pdf";
const UPLOAD_PATH_SEGMENT: &str = "/upload/";
const FORCE_ATTACHMENT_PATH_SEGMENT: &str = "/upload/fl_attachment/";

#[derive(Debug, Error, PartialEq)]
#[error("Unsupported file type: {0}")]
pub struct FileTypeError(pub String);

/// Classification of an uploaded file; decides both the remote resource type and
/// which collection the resulting record lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
    Pdf,
}

impl FileType {
    pub fn from_mime(mime: &str) -> Result<Self, FileTypeError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("image/") {
            Ok(FileType::Image)
        } else if essence.starts_with("video/") {
            Ok(FileType::Video)
        } else if essence == PDF_MIME_TYPE {
            Ok(FileType::Pdf)
        } else {
            Err(FileTypeError(mime.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Pdf => "pdf",
        }
    }

    /// Rewrite a delivery URL so browsers download the file instead of rendering it.
    /// Only PDFs are rewritten.
    pub fn delivery_url(&self, url: String) -> String {
        match self {
            FileType::Pdf => force_download_url(&url),
            FileType::Image | FileType::Video => url,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn force_download_url(url: &str) -> String {
    if url.contains(FORCE_ATTACHMENT_PATH_SEGMENT) {
        return url.to_string();
    }
    url.replacen(UPLOAD_PATH_SEGMENT, FORCE_ATTACHMENT_PATH_SEGMENT, 1)
}

/// A file received from a client and written to local temporary storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub content_type: String,
    pub original_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAsset {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    pub file_type: FileType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UploadedAsset {
    pub fn new(file_type: FileType, url: String, public_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            public_id,
            file_type,
            created_at: now,
            updated_at: now,
        }
    }
}
