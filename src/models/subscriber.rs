use diesel::prelude::*;

use crate::domain::subscriber::{NewSubscriber as DomainNewSubscriber, Subscriber as DomainSubscriber};
use crate::domain::types::{SubscriberEmail, TypeConstraintError};

/// Diesel model representing the `subscribers` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::subscribers)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::subscribers)]
pub struct NewSubscriber {
    pub email: String,
}

impl TryFrom<Subscriber> for DomainSubscriber {
    type Error = TypeConstraintError;

    fn try_from(subscriber: Subscriber) -> Result<Self, Self::Error> {
        Ok(Self {
            id: subscriber.id.try_into()?,
            email: SubscriberEmail::new(subscriber.email)?,
        })
    }
}

impl From<DomainNewSubscriber> for NewSubscriber {
    fn from(subscriber: DomainNewSubscriber) -> Self {
        Self {
            email: subscriber.email.into_inner(),
        }
    }
}
