use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use coursehub_core::{Course, CourseFilter, CourseId, CourseStore, CourseStoreError};

#[derive(Default, Clone)]
pub struct HashMapCourseStore {
    courses: Arc<RwLock<HashMap<CourseId, Course>>>,
}

impl HashMapCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CourseStore for HashMapCourseStore {
    async fn add_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        let mut courses = self.courses.write().await;
        courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, CourseStoreError> {
        let courses = self.courses.read().await;
        courses
            .get(&id)
            .cloned()
            .ok_or(CourseStoreError::CourseNotFound)
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseStoreError> {
        let courses = self.courses.read().await;
        let mut matching: Vec<Course> = courses
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        let mut courses = self.courses.write().await;
        let stored = courses
            .get_mut(&course.id)
            .ok_or(CourseStoreError::CourseNotFound)?;
        *stored = course.clone();
        Ok(course)
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), CourseStoreError> {
        let mut courses = self.courses.write().await;
        courses
            .remove(&id)
            .ok_or(CourseStoreError::CourseNotFound)?;
        Ok(())
    }
}
