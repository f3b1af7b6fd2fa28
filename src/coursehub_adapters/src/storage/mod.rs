pub mod cloudinary_client;
pub mod disk_staging;
