use serde::Deserialize;
use validator::Validate;

use crate::domain::types::Username;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFormPayload {
    pub username: Username,
    pub password: String,
    pub phone: Option<String>,
}

impl TryFrom<RegisterForm> for RegisterFormPayload {
    type Error = FormError;

    fn try_from(value: RegisterForm) -> Result<Self, Self::Error> {
        if value.password != value.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        value.validate()?;

        let phone = value
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            username: Username::new(value.username)?,
            password: value.password,
            phone,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
