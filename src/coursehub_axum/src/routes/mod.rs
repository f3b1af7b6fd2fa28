mod create_course;
mod delete_course;
mod get_course;
mod list_courses;
mod login;
mod signup;
mod upload;
mod update_course;

pub use create_course::{CreateCourseRequest, create_course};
pub use delete_course::{DeleteCourseResponse, delete_course};
pub use get_course::get_course;
pub use list_courses::{ListCoursesQuery, list_courses};
pub use login::{LoginRequest, login};
pub use signup::{AuthResponse, SignupRequest, signup};
pub use upload::{UploadResponse, upload_image, upload_pdf, upload_video};
pub use update_course::{UpdateCourseRequest, update_course};
