pub mod api;
pub mod classifier;
pub mod constants;
pub mod schemas;
pub mod transaction;
