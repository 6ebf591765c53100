use serde::Deserialize;
use validator::Validate;

use crate::domain::subscriber::NewSubscriber;
use crate::domain::types::SubscriberEmail;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeForm {
    #[serde(rename = "subscriberMail")]
    #[validate(length(min = 1))]
    pub email: String,
}

impl TryFrom<SubscribeForm> for NewSubscriber {
    type Error = FormError;

    fn try_from(value: SubscribeForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            email: SubscriberEmail::new(value.email)?,
        })
    }
}
