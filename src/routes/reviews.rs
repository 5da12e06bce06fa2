use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use http::StatusCode;
use serde_json::Value;

use crate::domain::Review;
use crate::routes::ApiError;
use crate::startup::AppState;
use crate::validation::{validate_review_input, ValidationError};

#[tracing::instrument(name = "Fetching all reviews", skip(state))]
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state
        .storage
        .reviews
        .list()
        .map_err(ApiError::unexpected("Failed to fetch reviews"))?;
    Ok(Json(reviews))
}

// The body is taken as raw JSON so that every shape problem, a missing
// `Content-Type` included, comes back as a 400 with a JSON message.
#[tracing::instrument(
    name = "Adding a new review",
    skip(state, payload),
    fields(
        review_id = tracing::field::Empty,
        rating = tracing::field::Empty,
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let Json(raw) =
        payload.map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
    let new_review = validate_review_input(&raw)?;
    let review = state
        .storage
        .reviews
        .create(new_review)
        .map_err(ApiError::unexpected("Failed to create review"))?;
    tracing::Span::current()
        .record("review_id", &tracing::field::display(&review.id))
        .record("rating", &review.rating);
    Ok((StatusCode::CREATED, Json(review)))
}
