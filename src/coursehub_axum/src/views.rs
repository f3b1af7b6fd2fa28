//! Client-facing renderings of domain entities.
//!
//! Every entity is exposed with an `id`; embedded lessons and quizzes also carry
//! their parent's id (`courseId`, `quizId`). Password hashes never appear here.

use chrono::{DateTime, Utc};
use coursehub_core::{
    Course, CourseId, FileType, Lesson, Level, Question, Quiz, Role, UploadedAsset, User, UserId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            role: user.role(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub instructor_id: UserId,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub level: Level,
    pub price: f64,
    pub published: bool,
    pub lessons: Vec<LessonView>,
    pub quizzes: Vec<QuizView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonView {
    pub id: Uuid,
    pub course_id: CourseId,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub document_url: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: Uuid,
    pub course_id: CourseId,
    pub title: String,
    pub passing_score: u32,
    pub order: u32,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub points: u32,
}

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        let course_id = course.id;
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            instructor_id: course.instructor_id,
            category: course.category,
            tags: course.tags,
            level: course.level,
            price: course.price,
            published: course.published,
            lessons: course
                .lessons
                .into_iter()
                .map(|lesson| LessonView::new(lesson, course_id))
                .collect(),
            quizzes: course
                .quizzes
                .into_iter()
                .map(|quiz| QuizView::new(quiz, course_id))
                .collect(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl LessonView {
    fn new(lesson: Lesson, course_id: CourseId) -> Self {
        Self {
            id: lesson.id,
            course_id,
            title: lesson.title,
            content: lesson.content,
            video_url: lesson.video_url,
            document_url: lesson.document_url,
            order: lesson.order,
        }
    }
}

impl QuizView {
    fn new(quiz: Quiz, course_id: CourseId) -> Self {
        let quiz_id = quiz.id;
        Self {
            id: quiz.id,
            course_id,
            title: quiz.title,
            passing_score: quiz.passing_score,
            order: quiz.order,
            questions: quiz
                .questions
                .into_iter()
                .map(|question| QuestionView::new(question, quiz_id))
                .collect(),
        }
    }
}

impl QuestionView {
    fn new(question: Question, quiz_id: Uuid) -> Self {
        Self {
            id: question.id,
            quiz_id,
            text: question.text,
            options: question.options,
            correct_answer: question.correct_answer,
            points: question.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    pub file_type: FileType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UploadedAsset> for AssetView {
    fn from(asset: UploadedAsset) -> Self {
        Self {
            id: asset.id,
            url: asset.url,
            public_id: asset.public_id,
            file_type: asset.file_type,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        }
    }
}
