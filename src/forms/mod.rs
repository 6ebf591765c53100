//! Submitted form payloads and their validation.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod listing;
pub mod posts;
pub mod subscribers;

/// Reasons a submitted form is rejected before reaching a service.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Form validation failed: {0}")]
    Validation(String),
    #[error("Form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Password and Confirm password do not match.")]
    PasswordMismatch,
}

impl From<ValidationErrors> for FormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}
