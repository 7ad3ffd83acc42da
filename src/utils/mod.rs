pub mod constants;
pub mod fetch;
pub mod files;
pub mod logger;
pub mod misc;
