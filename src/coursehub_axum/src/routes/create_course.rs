use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use coursehub_application::CreateCourseUseCase;
use coursehub_core::{CourseDraft, CourseStore, Identity, LessonDraft, Level, QuizDraft, UserId};
use serde::Deserialize;

use crate::{error::ApiError, views::CourseView};

#[tracing::instrument(name = "Create course", skip_all, fields(user_id = %caller.id))]
pub async fn create_course<C>(
    State(course_store): State<C>,
    Extension(caller): Extension<Identity>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CourseStore + Clone,
{
    let Json(request) = payload?;
    let draft = CourseDraft::try_from(request)?;

    let course = CreateCourseUseCase::new(&course_store)
        .execute(draft, &caller)
        .await?;

    Ok((StatusCode::CREATED, Json(CourseView::from(course))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub instructor_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub level: Option<Level>,
    pub price: Option<f64>,
    pub published: Option<bool>,
    pub lessons: Option<Vec<LessonDraft>>,
    pub quizzes: Option<Vec<QuizDraft>>,
}

impl TryFrom<CreateCourseRequest> for CourseDraft {
    type Error = ApiError;

    fn try_from(request: CreateCourseRequest) -> Result<Self, Self::Error> {
        let instructor_id = request
            .instructor_id
            .map(|raw| {
                UserId::parse(&raw)
                    .ok_or_else(|| ApiError::InvalidInput(format!("Invalid instructorId: {raw}")))
            })
            .transpose()?;

        Ok(CourseDraft {
            title: request.title,
            description: request.description,
            thumbnail: request.thumbnail,
            instructor_id,
            category: request.category,
            tags: request.tags,
            level: request.level,
            price: request.price,
            published: request.published,
            lessons: request.lessons,
            quizzes: request.quizzes,
        })
    }
}
