use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use coursehub_application::ListCoursesUseCase;
use coursehub_core::CourseStore;
use serde::Deserialize;

use crate::{error::ApiError, views::CourseView};

#[tracing::instrument(name = "List courses", skip(course_store))]
pub async fn list_courses<C>(
    State(course_store): State<C>,
    query: Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CourseStore + Clone,
{
    let Query(query) = query?;

    let courses = ListCoursesUseCase::new(&course_store)
        .execute(query.published_filter(), query.instructor_id.as_deref())
        .await?;

    let views: Vec<CourseView> = courses.into_iter().map(CourseView::from).collect();
    Ok(Json(views))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCoursesQuery {
    pub published: Option<String>,
    pub instructor_id: Option<String>,
}

impl ListCoursesQuery {
    /// `published=true` selects published courses; any other value selects unpublished ones.
    fn published_filter(&self) -> Option<bool> {
        self.published.as_deref().map(|value| value == "true")
    }
}
