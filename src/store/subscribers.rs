use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::Utc;

use crate::domain::{EmailSubscriber, NewSubscriber};
use crate::store::{new_id, RecordId, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("is already subscribed")]
    AlreadySubscribed,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Default)]
struct SubscriberTable {
    by_id: HashMap<RecordId, EmailSubscriber>,
    insertion_order: Vec<RecordId>,
    // Lower-cased addresses of everyone in `by_id`.
    emails: HashSet<String>,
}

/// Mailing-list entries keyed by id, at most one per email address.
#[derive(Debug, Default)]
pub struct SubscriberStore {
    table: RwLock<SubscriberTable>,
}

impl SubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everyone on the list, in the order they signed up.
    #[tracing::instrument(name = "Listing subscribers", skip(self))]
    pub fn list(&self) -> Result<Vec<EmailSubscriber>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::poisoned("subscriber"))?;
        Ok(table
            .insertion_order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .cloned()
            .collect())
    }

    /// Adds an already-validated subscriber. The duplicate check and the
    /// insert happen under the same write lock.
    #[tracing::instrument(name = "Saving new subscriber", skip(self, new_subscriber))]
    pub fn subscribe(&self, new_subscriber: NewSubscriber) -> Result<EmailSubscriber, SubscribeError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::poisoned("subscriber"))?;
        let key = new_subscriber.email.uniqueness_key();
        if table.emails.contains(&key) {
            return Err(SubscribeError::AlreadySubscribed);
        }

        let mut id = new_id();
        while table.by_id.contains_key(&id) {
            id = new_id();
        }
        let subscriber = EmailSubscriber {
            id,
            email: new_subscriber.email.as_ref().to_string(),
            name: new_subscriber.name.map(String::from),
            created_at: Utc::now(),
        };
        table.emails.insert(key);
        table.by_id.insert(id, subscriber.clone());
        table.insertion_order.push(id);
        Ok(subscriber)
    }
}
