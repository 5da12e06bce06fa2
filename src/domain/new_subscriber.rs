use crate::domain::{SubscriberEmail, SubscriberName};

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub name: Option<SubscriberName>,
}
