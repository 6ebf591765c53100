use serde::Serialize;

use crate::domain::subscriber::Subscriber;

/// JSON shape of `/subscribersList` entries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubscriberDto {
    pub id: i32,
    pub email: String,
}

impl From<Subscriber> for SubscriberDto {
    fn from(value: Subscriber) -> Self {
        Self {
            id: value.id.get(),
            email: value.email.into_inner(),
        }
    }
}
