use chrono::Utc;
use coursehub_core::{Course, CourseDraft, CourseError, CourseStore, CourseStoreError, Identity};

/// Error types specific to create course use case
#[derive(Debug, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Invalid course: {0}")]
    InvalidCourse(#[from] CourseError),
    #[error("Course store error: {0}")]
    CourseStoreError(#[from] CourseStoreError),
}

/// Create course use case
pub struct CreateCourseUseCase<'a, C>
where
    C: CourseStore,
{
    course_store: &'a C,
}

impl<'a, C> CreateCourseUseCase<'a, C>
where
    C: CourseStore,
{
    pub fn new(course_store: &'a C) -> Self {
        Self { course_store }
    }

    /// Validate and persist a new course owned by the draft's instructor, or the
    /// caller when the draft names none. Nothing is persisted when validation fails.
    #[tracing::instrument(
        name = "CreateCourseUseCase::execute",
        skip(self, draft, caller),
        fields(caller_id = %caller.id)
    )]
    pub async fn execute(
        &self,
        draft: CourseDraft,
        caller: &Identity,
    ) -> Result<Course, CreateCourseError> {
        let course = Course::create(draft, caller.id, Utc::now())?;

        Ok(self.course_store.add_course(course).await?)
    }
}
