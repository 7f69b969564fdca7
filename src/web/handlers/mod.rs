pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod export;
pub mod landing;
