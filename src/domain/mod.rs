//! Domain entities and value objects shared by the persistence and web layers.

pub mod post;
pub mod subscriber;
pub mod types;
pub mod user;
