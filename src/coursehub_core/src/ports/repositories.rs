use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    asset::UploadedAsset,
    course::{Course, CourseFilter, CourseId},
    email::Email,
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Credential store. Email uniqueness is enforced here, not by callers.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
}

// CourseStore port trait and errors
#[derive(Debug, Error)]
pub enum CourseStoreError {
    #[error("Course not found")]
    CourseNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CourseStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::CourseNotFound, Self::CourseNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Course repository. Lessons and quizzes live inside the course record, so every
/// operation here is a single-record operation.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn add_course(&self, course: Course) -> Result<Course, CourseStoreError>;
    async fn get_course(&self, id: CourseId) -> Result<Course, CourseStoreError>;
    /// Matching courses, newest-created first.
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseStoreError>;
    /// Replace the stored course with the same id.
    async fn update_course(&self, course: Course) -> Result<Course, CourseStoreError>;
    async fn delete_course(&self, id: CourseId) -> Result<(), CourseStoreError>;
}

// AssetStore port trait and errors
#[derive(Debug, Error)]
pub enum AssetStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Records of files held by the external object store, one collection per file type.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn add_asset(&self, asset: UploadedAsset) -> Result<UploadedAsset, AssetStoreError>;
}
