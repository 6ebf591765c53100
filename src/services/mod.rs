//! Page logic that sits between the HTTP handlers and the repository.

pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod auth;
pub mod main;
pub mod posts;
pub mod subscribers;
