use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coursehub_adapters::TokenAuthError;
use coursehub_application::{
    CreateCourseError, DeleteCourseError, LoginError, SignupError, UpdateCourseError, UploadError,
};
use coursehub_core::{
    AssetStoreError, CourseError, CourseStoreError, FileTypeError, ObjectStoreError, UserError,
    UserStoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Not allowed to modify this course")]
    Forbidden,

    #[error("Course not found")]
    CourseNotFound,

    #[error("No file uploaded")]
    NoFile,

    #[error("{0}")]
    UnsupportedFileType(String),

    #[error("Unexpected field")]
    UnexpectedField,

    #[error("File too large")]
    FileTooLarge,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_)
            | ApiError::UserAlreadyExists
            | ApiError::NoFile
            | ApiError::UnsupportedFileType(_)
            | ApiError::UnexpectedField
            | ApiError::FileTooLarge => StatusCode::BAD_REQUEST,

            ApiError::UserNotFound | ApiError::InvalidCredentials | ApiError::MissingToken => {
                StatusCode::UNAUTHORIZED
            }

            ApiError::InvalidToken | ApiError::Forbidden => StatusCode::FORBIDDEN,

            ApiError::CourseNotFound => StatusCode::NOT_FOUND,

            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let error_message = match self {
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "Request failed with unexpected error");
                INTERNAL_SERVER_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::FileTooLarge
        } else {
            ApiError::InvalidInput(error.body_text())
        }
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<CourseError> for ApiError {
    fn from(error: CourseError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<FileTypeError> for ApiError {
    fn from(error: FileTypeError) -> Self {
        ApiError::UnsupportedFileType(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => ApiError::UserNotFound,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<CourseStoreError> for ApiError {
    fn from(error: CourseStoreError) -> Self {
        match error {
            CourseStoreError::CourseNotFound => ApiError::CourseNotFound,
            CourseStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<AssetStoreError> for ApiError {
    fn from(error: AssetStoreError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<ObjectStoreError> for ApiError {
    fn from(error: ObjectStoreError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenAuthError> for ApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::MissingToken => ApiError::MissingToken,
            TokenAuthError::TokenError(_) => ApiError::InvalidToken,
            TokenAuthError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::UserStoreError(e) => e.into(),
            SignupError::RoleNotAllowed(_) => ApiError::InvalidInput(error.to_string()),
            SignupError::PasswordHashError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(e) => e.into(),
            LoginError::IncorrectPassword => ApiError::InvalidCredentials,
            LoginError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<CreateCourseError> for ApiError {
    fn from(error: CreateCourseError) -> Self {
        match error {
            CreateCourseError::InvalidCourse(e) => e.into(),
            CreateCourseError::CourseStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateCourseError> for ApiError {
    fn from(error: UpdateCourseError) -> Self {
        match error {
            UpdateCourseError::InvalidCourse(e) => e.into(),
            UpdateCourseError::Forbidden => ApiError::Forbidden,
            UpdateCourseError::CourseStoreError(e) => e.into(),
        }
    }
}

impl From<DeleteCourseError> for ApiError {
    fn from(error: DeleteCourseError) -> Self {
        match error {
            DeleteCourseError::Forbidden => ApiError::Forbidden,
            DeleteCourseError::CourseStoreError(e) => e.into(),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::NoFile => ApiError::NoFile,
            UploadError::UnsupportedType(e) => e.into(),
            UploadError::StagingError(e) => ApiError::UnexpectedError(e),
            UploadError::ObjectStoreError(e) => e.into(),
            UploadError::AssetStoreError(e) => e.into(),
        }
    }
}
