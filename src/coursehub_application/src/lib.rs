pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    create_course::{CreateCourseError, CreateCourseUseCase},
    delete_course::{DeleteCourseError, DeleteCourseUseCase},
    get_course::GetCourseUseCase,
    list_courses::ListCoursesUseCase,
    login::{LoginError, LoginUseCase},
    signup::{SignupError, SignupUseCase},
    update_course::{UpdateCourseError, UpdateCourseUseCase},
    upload_asset::{UploadAssetUseCase, UploadError},
};
