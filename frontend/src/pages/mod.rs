pub mod deutsch;
pub mod games;
pub mod home;
pub mod landing;
pub mod not_found;
