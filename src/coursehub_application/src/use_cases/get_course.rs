use coursehub_core::{Course, CourseId, CourseStore, CourseStoreError};

/// Get course use case - single course lookup
pub struct GetCourseUseCase<'a, C>
where
    C: CourseStore,
{
    course_store: &'a C,
}

impl<'a, C> GetCourseUseCase<'a, C>
where
    C: CourseStore,
{
    pub fn new(course_store: &'a C) -> Self {
        Self { course_store }
    }

    /// Malformed ids are reported as not found.
    #[tracing::instrument(name = "GetCourseUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &str) -> Result<Course, CourseStoreError> {
        let id = CourseId::parse(id).ok_or(CourseStoreError::CourseNotFound)?;
        self.course_store.get_course(id).await
    }
}
