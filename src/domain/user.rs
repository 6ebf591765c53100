use serde::{Deserialize, Serialize};

use crate::domain::types::{UserId, Username};

/// A registered author account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    /// Argon2 hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
}

/// Data required to insert a new [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
    pub phone: Option<String>,
}
