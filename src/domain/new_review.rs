use crate::domain::{ContactEmail, Rating, ReviewComment, ReviewerName};

/// A review that passed validation but has not been stored yet, so it has
/// neither an id nor a timestamp.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub name: ReviewerName,
    pub email: ContactEmail,
    pub rating: Rating,
    pub comment: ReviewComment,
}
