use chrono::Utc;
use coursehub_core::{
    Course, CourseError, CourseId, CoursePatch, CourseStore, CourseStoreError, Identity,
};

/// Error types specific to update course use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateCourseError {
    #[error("Invalid course: {0}")]
    InvalidCourse(#[from] CourseError),
    #[error("Only the course instructor or an admin may modify this course")]
    Forbidden,
    #[error("Course store error: {0}")]
    CourseStoreError(#[from] CourseStoreError),
}

/// Update course use case - partial update with full revalidation
pub struct UpdateCourseUseCase<'a, C>
where
    C: CourseStore,
{
    course_store: &'a C,
}

impl<'a, C> UpdateCourseUseCase<'a, C>
where
    C: CourseStore,
{
    pub fn new(course_store: &'a C) -> Self {
        Self { course_store }
    }

    /// Merge `patch` into the stored course, revalidate the merged document and
    /// store it. Returns the post-update course.
    #[tracing::instrument(
        name = "UpdateCourseUseCase::execute",
        skip(self, patch, caller),
        fields(caller_id = %caller.id)
    )]
    pub async fn execute(
        &self,
        id: &str,
        patch: CoursePatch,
        caller: &Identity,
    ) -> Result<Course, UpdateCourseError> {
        let id = CourseId::parse(id).ok_or(CourseStoreError::CourseNotFound)?;
        let course = self.course_store.get_course(id).await?;

        if !caller.can_manage(&course) {
            return Err(UpdateCourseError::Forbidden);
        }

        let updated = course.apply(patch, Utc::now())?;

        Ok(self.course_store.update_course(updated).await?)
    }
}
