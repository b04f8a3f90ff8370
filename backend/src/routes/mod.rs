//! View DTOs and the `/v1` paths they are served under.

pub mod aggregates;
pub mod camera_image;
pub mod dashboard;
pub mod download;
pub mod landing;
pub mod timeline;
