pub mod asset;
pub mod course;
pub mod email;
pub mod identity;
pub mod password;
pub mod role;
pub mod user;
pub mod user_name;
