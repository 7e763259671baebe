pub mod crumbs;
pub mod misc;
