//! View models handed to templates and JSON responses.

pub mod posts;
pub mod subscribers;
