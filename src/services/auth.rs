use crate::domain::types::Username;
use crate::domain::user::NewUser;
use crate::forms::auth::{LoginForm, RegisterFormPayload};
use crate::password::{hash_password, verify_password};
use crate::repository::{RepositoryError, UserReader, UserWriter};

use super::{ServiceError, ServiceResult};

/// Create an account. The visitor is not logged in afterwards.
pub fn register<R>(payload: RegisterFormPayload, repo: &R) -> ServiceResult<()>
where
    R: UserReader + UserWriter,
{
    match repo.get_user_by_username(&payload.username) {
        Ok(None) => {}
        Ok(Some(_)) => return Err(ServiceError::Conflict(payload.username.into_inner())),
        Err(e) => {
            log::error!("error while user registering: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let password_hash = hash_password(&payload.password).map_err(|e| {
        log::error!("error while user registering: {e}");
        ServiceError::Internal
    })?;

    let user = NewUser {
        username: payload.username,
        password_hash,
        phone: payload.phone,
    };

    match repo.create_user(&user) {
        Ok(id) => {
            log::info!("Registered user {id} '{}'", user.username);
            Ok(())
        }
        Err(RepositoryError::ConflictError(_)) => {
            Err(ServiceError::Conflict(user.username.into_inner()))
        }
        Err(e) => {
            log::error!("error while user registering: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Check credentials and return the identity to attach to the session.
///
/// Unknown users and wrong passwords are indistinguishable to the caller.
pub fn login<R>(form: &LoginForm, repo: &R) -> ServiceResult<Username>
where
    R: UserReader,
{
    let username = Username::new(form.username.as_str()).map_err(|_| ServiceError::Unauthorized)?;

    let user = match repo.get_user_by_username(&username) {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ServiceError::Unauthorized),
        Err(e) => {
            log::error!("Failed to load user for login: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match verify_password(&form.password, &user.password_hash) {
        Ok(true) => Ok(user.username),
        Ok(false) => Err(ServiceError::Unauthorized),
        Err(e) => {
            log::error!("Stored password hash for '{}' is unusable: {e}", user.username);
            Err(ServiceError::Internal)
        }
    }
}
