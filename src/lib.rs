//! # CourseHub - Learning Platform Backend
//!
//! Facade crate re-exporting the public APIs of the course hub components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! coursehub = { path = "../coursehub" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Course`, `Lesson`, `Quiz`, `UploadedAsset`, etc.
//! - **Ports**: `UserStore`, `CourseStore`, `AssetStore`, `ObjectStore`, `PasswordHasher`
//! - **Use cases**: `SignupUseCase`, `CreateCourseUseCase`, `UploadAssetUseCase`, etc.
//! - **Adapters**: `PostgresCourseStore`, `CloudinaryClient`, `JwtValidator`, etc.
//! - **Service**: `CourseHubService` mounts every route under `/api`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use coursehub_core::*;
}

pub use coursehub_core::{
    Course, CourseDraft, CourseId, CoursePatch, Email, FileType, Identity, Lesson, Level,
    Password, Question, Quiz, Role, UploadedAsset, User, UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use coursehub_core::{
        AssetStore, AssetStoreError, AuthValidator, CourseStore, CourseStoreError, ObjectStore,
        ObjectStoreError, PasswordHasher, UserStore, UserStoreError,
    };
}

pub use ports::*;

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use coursehub_application::*;
}

pub use coursehub_application::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListCoursesUseCase, LoginUseCase,
    SignupUseCase, UpdateCourseUseCase, UploadAssetUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP handlers, extractors and error mapping
    pub mod http {
        pub use coursehub_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use coursehub_adapters::persistence::*;
    }

    /// Object storage and upload staging
    pub mod storage {
        pub use coursehub_adapters::storage::*;
    }

    /// JWT issuing and validation
    pub mod auth {
        pub use coursehub_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use coursehub_adapters::config::*;
    }
}

pub use coursehub_adapters::{
    Argon2PasswordHasher, CloudinaryClient, DiskStaging, HashMapAssetStore, HashMapCourseStore,
    HashMapUserStore, JwtValidator, PostgresAssetStore, PostgresCourseStore, PostgresUserStore,
};

// ============================================================================
// Course Hub Service (Main Entry Point)
// ============================================================================

pub use coursehub_service::{CourseHubService, get_postgres_pool, run_migrations};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
