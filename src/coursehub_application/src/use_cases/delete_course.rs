use coursehub_core::{CourseId, CourseStore, CourseStoreError, Identity};

/// Error types specific to delete course use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteCourseError {
    #[error("Only the course instructor or an admin may delete this course")]
    Forbidden,
    #[error("Course store error: {0}")]
    CourseStoreError(#[from] CourseStoreError),
}

/// Delete course use case - removes the course with its lessons and quizzes
pub struct DeleteCourseUseCase<'a, C>
where
    C: CourseStore,
{
    course_store: &'a C,
}

impl<'a, C> DeleteCourseUseCase<'a, C>
where
    C: CourseStore,
{
    pub fn new(course_store: &'a C) -> Self {
        Self { course_store }
    }

    #[tracing::instrument(
        name = "DeleteCourseUseCase::execute",
        skip(self, caller),
        fields(caller_id = %caller.id)
    )]
    pub async fn execute(&self, id: &str, caller: &Identity) -> Result<(), DeleteCourseError> {
        let id = CourseId::parse(id).ok_or(CourseStoreError::CourseNotFound)?;
        let course = self.course_store.get_course(id).await?;

        if !caller.can_manage(&course) {
            return Err(DeleteCourseError::Forbidden);
        }

        Ok(self.course_store.delete_course(id).await?)
    }
}
