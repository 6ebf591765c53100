use crate::domain::subscriber::NewSubscriber;
use crate::dto::subscribers::SubscriberDto;
use crate::repository::{SubscriberReader, SubscriberWriter};

use super::{ServiceError, ServiceResult};

/// Record a newsletter sign-up. The same address may subscribe any number
/// of times.
pub fn subscribe<R>(subscriber: NewSubscriber, repo: &R) -> ServiceResult<()>
where
    R: SubscriberWriter,
{
    match repo.create_subscriber(&subscriber) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to create subscriber: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_subscribers<R>(repo: &R) -> ServiceResult<Vec<SubscriberDto>>
where
    R: SubscriberReader,
{
    match repo.list_subscribers() {
        Ok(subscribers) => Ok(subscribers.into_iter().map(SubscriberDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list subscribers: {e}");
            Err(ServiceError::Internal)
        }
    }
}
