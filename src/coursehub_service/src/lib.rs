pub mod course_hub_service;
pub mod helpers;
pub mod tracing;

pub use course_hub_service::CourseHubService;
pub use helpers::{get_postgres_pool, init_tracing, run_migrations};
