//! Axum integration for the course platform.
//!
//! Handlers stay thin: they turn request DTOs into domain values, run one
//! application use case and shape the result into a response view.
//!
//! ```text
//! request ─► DTO ─► domain value ─► use case ─► view ─► JSON
//!                                      │
//!                                      └─► ApiError ─► {"error": "..."}
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{ApiError, ErrorResponse};
pub use middleware::authenticate;
pub use state::{AuthState, UploadState};
