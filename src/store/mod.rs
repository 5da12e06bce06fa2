//! Volatile, process-wide record storage. Everything here is lost on restart.

mod identifier;
mod reviews;
mod samples;
mod subscribers;

pub use identifier::{new_id, RecordId};
pub use reviews::ReviewStore;
pub use samples::sample_reviews;
pub use subscribers::{SubscribeError, SubscriberStore};

/// A writer panicked while holding a store lock. Nothing sensible can be read
/// back out, so callers treat this as an unexpected failure.
#[derive(Debug, thiserror::Error)]
#[error("The {store} store is unavailable: its lock was poisoned")]
pub struct StoreError {
    store: &'static str,
}

impl StoreError {
    pub(crate) fn poisoned(store: &'static str) -> Self {
        Self { store }
    }
}

/// Both stores, created once at startup and shared with every request handler.
#[derive(Debug, Default)]
pub struct Storage {
    pub reviews: ReviewStore,
    pub subscribers: SubscriberStore,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the reviews the launch page ships with.
    pub fn with_sample_reviews() -> Result<Self, StoreError> {
        let storage = Self::new();
        for review in sample_reviews() {
            storage.reviews.insert(review)?;
        }
        Ok(storage)
    }
}
