use serde::{Deserialize, Serialize};

use crate::domain::types::{SubscriberEmail, SubscriberId};

/// A newsletter sign-up. Duplicate addresses are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: SubscriberEmail,
}

/// Data required to insert a new [`Subscriber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
}
