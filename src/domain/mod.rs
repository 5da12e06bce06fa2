mod contact_email;
mod email_subscriber;
mod new_review;
mod new_subscriber;
mod rating;
mod review;
mod review_comment;
mod reviewer_name;
mod subscriber_email;
mod subscriber_name;

pub use contact_email::ContactEmail;
pub use email_subscriber::EmailSubscriber;
pub use new_review::NewReview;
pub use new_subscriber::NewSubscriber;
pub use rating::Rating;
pub use review::Review;
pub use review_comment::ReviewComment;
pub use reviewer_name::ReviewerName;
pub use subscriber_email::SubscriberEmail;
pub use subscriber_name::SubscriberName;
