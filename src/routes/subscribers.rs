use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use http::StatusCode;
use serde_json::Value;

use crate::domain::EmailSubscriber;
use crate::routes::ApiError;
use crate::startup::AppState;
use crate::store::SubscribeError;
use crate::validation::{validate_subscriber_input, ValidationError};

#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(state, payload),
    fields(subscriber_id = tracing::field::Empty)
)]
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<EmailSubscriber>), ApiError> {
    let Json(raw) =
        payload.map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
    let new_subscriber = validate_subscriber_input(&raw)?;
    let subscriber = state
        .storage
        .subscribers
        .subscribe(new_subscriber)
        .map_err(|error| match error {
            duplicate @ SubscribeError::AlreadySubscribed => {
                ApiError::ValidationError(ValidationError::Invalid {
                    field: "email",
                    reason: duplicate.to_string(),
                })
            }
            SubscribeError::Store(error) => ApiError::unexpected("Failed to subscribe email")(error),
        })?;
    tracing::Span::current().record("subscriber_id", &tracing::field::display(&subscriber.id));
    Ok((StatusCode::CREATED, Json(subscriber)))
}

#[tracing::instrument(name = "Fetching all subscribers", skip(state))]
pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmailSubscriber>>, ApiError> {
    let subscribers = state
        .storage
        .subscribers
        .list()
        .map_err(ApiError::unexpected("Failed to fetch subscribers"))?;
    Ok(Json(subscribers))
}
