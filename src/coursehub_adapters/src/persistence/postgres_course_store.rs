use chrono::{DateTime, Utc};
use coursehub_core::{
    Course, CourseFilter, CourseId, CourseStore, CourseStoreError, Lesson, Level, Quiz, UserId,
};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

/// Courses live in one row each; lessons and quizzes are JSONB columns of that row.
#[derive(Clone)]
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCourseStore { pool }
    }
}

const COURSE_COLUMNS: &str = "id, title, description, thumbnail, instructor_id, category, tags, \
     level, price, published, lessons, quizzes, created_at, updated_at";

#[derive(FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: String,
    thumbnail: Option<String>,
    instructor_id: Uuid,
    category: Option<String>,
    tags: Vec<String>,
    level: String,
    price: f64,
    published: bool,
    lessons: Json<Vec<Lesson>>,
    quizzes: Json<Vec<Quiz>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = CourseStoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let level = row
            .level
            .parse::<Level>()
            .map_err(|e| CourseStoreError::UnexpectedError(e.to_string()))?;

        Ok(Course {
            id: CourseId::from(row.id),
            title: row.title,
            description: row.description,
            thumbnail: row.thumbnail,
            instructor_id: UserId::from(row.instructor_id),
            category: row.category,
            tags: row.tags,
            level,
            price: row.price,
            published: row.published,
            lessons: row.lessons.0,
            quizzes: row.quizzes.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn unexpected(e: sqlx::Error) -> CourseStoreError {
    CourseStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl CourseStore for PostgresCourseStore {
    #[tracing::instrument(name = "Adding course to PostgreSQL", skip_all)]
    async fn add_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        sqlx::query(
            r#"
                INSERT INTO courses (id, title, description, thumbnail, instructor_id, category,
                                     tags, level, price, published, lessons, quizzes,
                                     created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(course.id.as_uuid())
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.thumbnail)
        .bind(course.instructor_id.as_uuid())
        .bind(&course.category)
        .bind(&course.tags)
        .bind(course.level.as_str())
        .bind(course.price)
        .bind(course.published)
        .bind(Json(&course.lessons))
        .bind(Json(&course.quizzes))
        .bind(course.created_at)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(course)
    }

    #[tracing::instrument(name = "Retrieving course from PostgreSQL", skip(self))]
    async fn get_course(&self, id: CourseId) -> Result<Course, CourseStoreError> {
        let row: Option<CourseRow> =
            sqlx::query_as(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(unexpected)?;

        row.ok_or(CourseStoreError::CourseNotFound)?.try_into()
    }

    #[tracing::instrument(name = "Listing courses from PostgreSQL", skip(self))]
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseStoreError> {
        let rows: Vec<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses \
             WHERE ($1::BOOLEAN IS NULL OR published = $1) \
               AND ($2::UUID IS NULL OR instructor_id = $2) \
             ORDER BY created_at DESC"
        ))
        .bind(filter.published)
        .bind(filter.instructor_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        rows.into_iter().map(Course::try_from).collect()
    }

    #[tracing::instrument(name = "Updating course in PostgreSQL", skip_all)]
    async fn update_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE courses
                SET title = $2, description = $3, thumbnail = $4, category = $5, tags = $6,
                    level = $7, price = $8, published = $9, lessons = $10, quizzes = $11,
                    updated_at = $12
                WHERE id = $1
            "#,
        )
        .bind(course.id.as_uuid())
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.thumbnail)
        .bind(&course.category)
        .bind(&course.tags)
        .bind(course.level.as_str())
        .bind(course.price)
        .bind(course.published)
        .bind(Json(&course.lessons))
        .bind(Json(&course.quizzes))
        .bind(course.updated_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(CourseStoreError::CourseNotFound);
        }

        Ok(course)
    }

    #[tracing::instrument(name = "Deleting course from PostgreSQL", skip(self))]
    async fn delete_course(&self, id: CourseId) -> Result<(), CourseStoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(CourseStoreError::CourseNotFound);
        }

        Ok(())
    }
}
