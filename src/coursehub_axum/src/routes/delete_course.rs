use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use coursehub_application::DeleteCourseUseCase;
use coursehub_core::{CourseStore, Identity};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[tracing::instrument(name = "Delete course", skip(course_store, caller), fields(user_id = %caller.id))]
pub async fn delete_course<C>(
    State(course_store): State<C>,
    Extension(caller): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CourseStore + Clone,
{
    DeleteCourseUseCase::new(&course_store)
        .execute(&id, &caller)
        .await?;

    Ok(Json(DeleteCourseResponse {
        message: "Course deleted successfully".to_string(),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCourseResponse {
    pub message: String,
}
