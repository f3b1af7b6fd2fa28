use coursehub_core::{Course, CourseFilter, CourseStore, CourseStoreError, UserId};

/// List courses use case - filtered listing, newest first
pub struct ListCoursesUseCase<'a, C>
where
    C: CourseStore,
{
    course_store: &'a C,
}

impl<'a, C> ListCoursesUseCase<'a, C>
where
    C: CourseStore,
{
    pub fn new(course_store: &'a C) -> Self {
        Self { course_store }
    }

    /// An instructor id that is not a well-formed identifier matches no course.
    #[tracing::instrument(name = "ListCoursesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        published: Option<bool>,
        instructor_id: Option<&str>,
    ) -> Result<Vec<Course>, CourseStoreError> {
        let instructor_id = match instructor_id {
            Some(raw) => match UserId::parse(raw) {
                Some(id) => Some(id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let filter = CourseFilter {
            published,
            instructor_id,
        };

        self.course_store.list_courses(&filter).await
    }
}
