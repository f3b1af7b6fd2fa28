use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::user::UserId;

const DEFAULT_PASSING_SCORE: u32 = 70;
const DEFAULT_QUESTION_POINTS: u32 = 1;
const MAX_PASSING_SCORE: u32 = 100;
const MIN_QUESTION_OPTIONS: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum CourseError {
    #[error("Course title is required")]
    MissingTitle,
    #[error("Course price must be a non-negative number")]
    InvalidPrice,
    #[error("Invalid course level: {0}")]
    InvalidLevel(String),
    #[error("Lesson {lesson} is missing a title")]
    LessonMissingTitle { lesson: usize },
    #[error("Quiz {quiz} is missing a title")]
    QuizMissingTitle { quiz: usize },
    #[error("Quiz {quiz} passing score must be between 0 and 100, got {score}")]
    InvalidPassingScore { quiz: usize, score: u32 },
    #[error("Question {question} of quiz {quiz} is missing its text")]
    QuestionMissingText { quiz: usize, question: usize },
    #[error("Question {question} of quiz {quiz} needs at least two options")]
    TooFewOptions { quiz: usize, question: usize },
    #[error("Question {question} of quiz {quiz} is missing its correct answer")]
    MissingCorrectAnswer { quiz: usize, question: usize },
    #[error("Question {question} of quiz {quiz} has a correct answer outside its options")]
    CorrectAnswerOutOfRange { quiz: usize, question: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CourseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl FromStr for Level {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(CourseError::InvalidLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub document_url: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub passing_score: u32,
    pub order: u32,
    pub questions: Vec<Question>,
}

/// Client-supplied lesson. A missing `id` gets a fresh one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub document_url: Option<String>,
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: Option<Uuid>,
    pub text: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: Option<usize>,
    pub points: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub passing_score: Option<u32>,
    pub order: Option<u32>,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

/// Fields accepted when creating a course.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub instructor_id: Option<UserId>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub level: Option<Level>,
    pub price: Option<f64>,
    pub published: Option<bool>,
    pub lessons: Option<Vec<LessonDraft>>,
    pub quizzes: Option<Vec<QuizDraft>>,
}

/// Fields accepted when updating a course; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub level: Option<Level>,
    pub price: Option<f64>,
    pub published: Option<bool>,
    pub lessons: Option<Vec<LessonDraft>>,
    pub quizzes: Option<Vec<QuizDraft>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
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
    pub lessons: Vec<Lesson>,
    pub quizzes: Vec<Quiz>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Build and validate a new course. The owner is the draft's instructor when
    /// supplied, otherwise the caller.
    pub fn create(
        draft: CourseDraft,
        caller: UserId,
        now: DateTime<Utc>,
    ) -> Result<Self, CourseError> {
        let course = Self {
            id: CourseId::new(),
            title: draft.title.unwrap_or_default().trim().to_string(),
            description: draft.description.unwrap_or_default(),
            thumbnail: draft.thumbnail,
            instructor_id: draft.instructor_id.unwrap_or(caller),
            category: draft.category,
            tags: normalise_tags(draft.tags.unwrap_or_default()),
            level: draft.level.unwrap_or_default(),
            price: draft.price.unwrap_or(0.0),
            published: draft.published.unwrap_or(false),
            lessons: build_lessons(draft.lessons.unwrap_or_default()),
            quizzes: build_quizzes(draft.quizzes.unwrap_or_default())?,
            created_at: now,
            updated_at: now,
        };

        course.validate()?;
        Ok(course)
    }

    /// Merge a patch into a copy of this course and validate the merged result.
    pub fn apply(&self, patch: CoursePatch, now: DateTime<Utc>) -> Result<Self, CourseError> {
        let mut course = self.clone();

        if let Some(title) = patch.title {
            course.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            course.description = description;
        }
        if let Some(thumbnail) = patch.thumbnail {
            course.thumbnail = Some(thumbnail);
        }
        if let Some(category) = patch.category {
            course.category = Some(category);
        }
        if let Some(tags) = patch.tags {
            course.tags = normalise_tags(tags);
        }
        if let Some(level) = patch.level {
            course.level = level;
        }
        if let Some(price) = patch.price {
            course.price = price;
        }
        if let Some(published) = patch.published {
            course.published = published;
        }
        if let Some(lessons) = patch.lessons {
            course.lessons = build_lessons(lessons);
        }
        if let Some(quizzes) = patch.quizzes {
            course.quizzes = build_quizzes(quizzes)?;
        }
        course.updated_at = now;

        course.validate()?;
        Ok(course)
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.title.trim().is_empty() {
            return Err(CourseError::MissingTitle);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CourseError::InvalidPrice);
        }

        for (index, lesson) in self.lessons.iter().enumerate() {
            if lesson.title.trim().is_empty() {
                return Err(CourseError::LessonMissingTitle { lesson: index });
            }
        }

        for (quiz_index, quiz) in self.quizzes.iter().enumerate() {
            if quiz.title.trim().is_empty() {
                return Err(CourseError::QuizMissingTitle { quiz: quiz_index });
            }
            if quiz.passing_score > MAX_PASSING_SCORE {
                return Err(CourseError::InvalidPassingScore {
                    quiz: quiz_index,
                    score: quiz.passing_score,
                });
            }

            for (question_index, question) in quiz.questions.iter().enumerate() {
                if question.text.trim().is_empty() {
                    return Err(CourseError::QuestionMissingText {
                        quiz: quiz_index,
                        question: question_index,
                    });
                }
                if question.options.len() < MIN_QUESTION_OPTIONS {
                    return Err(CourseError::TooFewOptions {
                        quiz: quiz_index,
                        question: question_index,
                    });
                }
                if question.correct_answer >= question.options.len() {
                    return Err(CourseError::CorrectAnswerOutOfRange {
                        quiz: quiz_index,
                        question: question_index,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.instructor_id == user
    }
}

/// Listing filter; `None` fields match every course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub published: Option<bool>,
    pub instructor_id: Option<UserId>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        self.published.is_none_or(|published| course.published == published)
            && self
                .instructor_id
                .is_none_or(|instructor| course.instructor_id == instructor)
    }
}

fn normalise_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn build_lessons(drafts: Vec<LessonDraft>) -> Vec<Lesson> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(position, draft)| Lesson {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            title: draft.title.unwrap_or_default().trim().to_string(),
            content: draft.content.unwrap_or_default(),
            video_url: draft.video_url,
            document_url: draft.document_url,
            order: draft.order.unwrap_or(position as u32),
        })
        .collect()
}

fn build_quizzes(drafts: Vec<QuizDraft>) -> Result<Vec<Quiz>, CourseError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(quiz_index, draft)| {
            let questions = draft
                .questions
                .into_iter()
                .enumerate()
                .map(|(question_index, question)| {
                    let correct_answer =
                        question
                            .correct_answer
                            .ok_or(CourseError::MissingCorrectAnswer {
                                quiz: quiz_index,
                                question: question_index,
                            })?;

                    Ok(Question {
                        id: question.id.unwrap_or_else(Uuid::new_v4),
                        text: question.text.unwrap_or_default().trim().to_string(),
                        options: question.options,
                        correct_answer,
                        points: question.points.unwrap_or(DEFAULT_QUESTION_POINTS),
                    })
                })
                .collect::<Result<Vec<_>, CourseError>>()?;

            Ok(Quiz {
                id: draft.id.unwrap_or_else(Uuid::new_v4),
                title: draft.title.unwrap_or_default().trim().to_string(),
                passing_score: draft.passing_score.unwrap_or(DEFAULT_PASSING_SCORE),
                order: draft.order.unwrap_or(quiz_index as u32),
                questions,
            })
        })
        .collect()
}
