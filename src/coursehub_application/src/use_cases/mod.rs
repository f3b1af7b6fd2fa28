pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod login;
pub mod signup;
pub mod update_course;
pub mod upload_asset;
