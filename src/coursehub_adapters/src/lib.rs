pub mod auth_validation;
pub mod config;
pub mod password;
pub mod persistence;
pub mod storage;

pub use auth_validation::jwt_validator::{
    Claims, JwtAuthConfig, JwtValidator, TokenAuthError, generate_auth_token, validate_auth_token,
};
pub use password::argon2_password_hasher::Argon2PasswordHasher;
pub use persistence::{
    hashmap_asset_store::HashMapAssetStore, hashmap_course_store::HashMapCourseStore,
    hashmap_user_store::HashMapUserStore, postgres_asset_store::PostgresAssetStore,
    postgres_course_store::PostgresCourseStore, postgres_user_store::PostgresUserStore,
};
pub use storage::{
    cloudinary_client::{CloudinaryClient, SignatureAlgorithm},
    disk_staging::DiskStaging,
};
