use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{asset::FileType, password::Password, user::PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Failed to hash password: {0}")]
    UnexpectedError(String),
}

/// Port trait for salted one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError>;

    /// Constant-time comparison of a candidate against a stored hash.
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHashError>;
}

/// How the object store should process an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Image,
    Video,
    Raw,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl From<FileType> for ResourceType {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Image => ResourceType::Image,
            FileType::Video => ResourceType::Video,
            // PDFs bypass the image/video pipeline
            FileType::Pdf => ResourceType::Raw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("Object store request failed: {0}")]
    Transport(String),
    #[error("Object store rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected object store response: {0}")]
    InvalidResponse(String),
}

/// Port trait for the external object store holding uploaded files
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, object: ObjectUpload) -> Result<StoredObject, ObjectStoreError>;
    async fn remove(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), ObjectStoreError>;
}
