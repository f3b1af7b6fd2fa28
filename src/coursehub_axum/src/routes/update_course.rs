use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use coursehub_application::UpdateCourseUseCase;
use coursehub_core::{CoursePatch, CourseStore, Identity, LessonDraft, Level, QuizDraft};
use serde::Deserialize;

use crate::{error::ApiError, views::CourseView};

#[tracing::instrument(name = "Update course", skip(course_store, caller, payload), fields(user_id = %caller.id))]
pub async fn update_course<C>(
    State(course_store): State<C>,
    Extension(caller): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CourseStore + Clone,
{
    let Json(request) = payload?;

    let course = UpdateCourseUseCase::new(&course_store)
        .execute(&id, CoursePatch::from(request), &caller)
        .await?;

    Ok(Json(CourseView::from(course)))
}

/// Partial course document. Ownership and timestamps cannot be changed here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub level: Option<Level>,
    pub price: Option<f64>,
    pub published: Option<bool>,
    pub lessons: Option<Vec<LessonDraft>>,
    pub quizzes: Option<Vec<QuizDraft>>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(request: UpdateCourseRequest) -> Self {
        CoursePatch {
            title: request.title,
            description: request.description,
            thumbnail: request.thumbnail,
            category: request.category,
            tags: request.tags,
            level: request.level,
            price: request.price,
            published: request.published,
            lessons: request.lessons,
            quizzes: request.quizzes,
        }
    }
}
