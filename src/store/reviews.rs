use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::domain::{NewReview, Review};
use crate::store::{new_id, RecordId, StoreError};

#[derive(Debug, Default)]
struct ReviewTable {
    by_id: HashMap<RecordId, Review>,
    insertion_order: Vec<RecordId>,
}

impl ReviewTable {
    fn unused_id(&self) -> RecordId {
        loop {
            let id = new_id();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, review: Review) {
        if self.by_id.insert(review.id, review.clone()).is_none() {
            self.insertion_order.push(review.id);
        }
    }
}

/// Reviews keyed by id. A single lock guards the whole table, so a reader
/// never sees a half-inserted review.
#[derive(Debug, Default)]
pub struct ReviewStore {
    table: RwLock<ReviewTable>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reviews, most recent first. Reviews sharing a timestamp come out
    /// newest insert first.
    #[tracing::instrument(name = "Listing reviews", skip(self))]
    pub fn list(&self) -> Result<Vec<Review>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::poisoned("review"))?;
        let mut reviews: Vec<Review> = table
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| table.by_id.get(id))
            .cloned()
            .collect();
        // `sort_by` is stable, which keeps the tie-break above.
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    /// Stores an already-validated review. The id and timestamp are assigned
    /// here and nowhere else.
    #[tracing::instrument(name = "Saving new review", skip(self, new_review))]
    pub fn create(&self, new_review: NewReview) -> Result<Review, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::poisoned("review"))?;
        let review = Review {
            id: table.unused_id(),
            name: new_review.name.into(),
            email: new_review.email.into(),
            rating: new_review.rating.value(),
            comment: new_review.comment.into(),
            created_at: Utc::now(),
        };
        table.insert(review.clone());
        Ok(review)
    }

    /// Puts a complete record in as is. Used for seeding.
    pub(crate) fn insert(&self, review: Review) -> Result<(), StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::poisoned("review"))?
            .insert(review);
        Ok(())
    }
}
