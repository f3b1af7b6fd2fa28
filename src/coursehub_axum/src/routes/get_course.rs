use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use coursehub_application::GetCourseUseCase;
use coursehub_core::CourseStore;

use crate::{error::ApiError, views::CourseView};

#[tracing::instrument(name = "Get course", skip(course_store))]
pub async fn get_course<C>(
    State(course_store): State<C>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CourseStore + Clone,
{
    let course = GetCourseUseCase::new(&course_store).execute(&id).await?;

    Ok(Json(CourseView::from(course)))
}
