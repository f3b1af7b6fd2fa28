pub mod hashmap_asset_store;
pub mod hashmap_course_store;
pub mod hashmap_user_store;
pub mod postgres_asset_store;
pub mod postgres_course_store;
pub mod postgres_user_store;
