//! Turns raw JSON bodies into typed, validated inputs.
//!
//! Only the recognised fields of each entity are looked at; anything else in
//! the body (a caller-supplied `id` or `createdAt` included) is ignored. Fields
//! are checked in a fixed order and the first violation is reported.

use serde_json::{Map, Value};

use crate::domain::{
    ContactEmail, NewReview, NewSubscriber, Rating, ReviewComment, ReviewerName,
    SubscriberEmail, SubscriberName,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Expected the request body to be a JSON object")]
    NotAnObject,
    #[error("`{field}` is required")]
    Missing { field: &'static str },
    #[error("`{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("`{field}` {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub fn validate_review_input(raw: &Value) -> Result<NewReview, ValidationError> {
    let body = as_object(raw)?;
    let name = ReviewerName::parse(required_string(body, "name")?).map_err(invalid("name"))?;
    let email = ContactEmail::parse(required_string(body, "email")?).map_err(invalid("email"))?;
    let rating = Rating::parse(required_integer(body, "rating")?).map_err(invalid("rating"))?;
    let comment =
        ReviewComment::parse(required_string(body, "comment")?).map_err(invalid("comment"))?;
    Ok(NewReview {
        name,
        email,
        rating,
        comment,
    })
}

pub fn validate_subscriber_input(raw: &Value) -> Result<NewSubscriber, ValidationError> {
    let body = as_object(raw)?;
    let email =
        SubscriberEmail::parse(required_string(body, "email")?).map_err(invalid("email"))?;
    let name = SubscriberName::parse(optional_string(body, "name")?).map_err(invalid("name"))?;
    Ok(NewSubscriber { email, name })
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or(ValidationError::NotAnObject)
}

fn invalid(field: &'static str) -> impl FnOnce(String) -> ValidationError {
    move |reason| ValidationError::Invalid { field, reason }
}

fn required_string(body: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    optional_string(body, field)?.ok_or(ValidationError::Missing { field })
}

// `null` counts as absent.
fn optional_string(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn required_integer(body: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    let wrong_type = ValidationError::WrongType {
        field,
        expected: "an integer",
    };
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        // Integers too large for i64 are still integers, just out of any sane range.
        // `5.0` is the integer 5 as far as JSON is concerned.
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .ok_or(wrong_type),
        Some(_) => Err(wrong_type),
    }
}
