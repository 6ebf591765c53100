//! Diesel row types and their conversions to domain entities.

#[cfg(feature = "server")]
pub mod config;
pub mod post;
pub mod subscriber;
pub mod user;
