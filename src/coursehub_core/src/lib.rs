pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    asset::{FileType, FileTypeError, StagedFile, UploadedAsset},
    course::{
        Course, CourseDraft, CourseError, CourseFilter, CourseId, CoursePatch, Lesson, LessonDraft,
        Level, Question, QuestionDraft, Quiz, QuizDraft,
    },
    email::Email,
    identity::Identity,
    password::Password,
    role::Role,
    user::{NewUser, PasswordHash, User, UserError, UserId},
    user_name::UserName,
};

pub use ports::{
    repositories::{
        AssetStore, AssetStoreError, CourseStore, CourseStoreError, UserStore, UserStoreError,
    },
    services::{
        ObjectStore, ObjectStoreError, ObjectUpload, PasswordHashError, PasswordHasher,
        ResourceType, StoredObject,
    },
};

pub use strategies::auth_validator::AuthValidator;
