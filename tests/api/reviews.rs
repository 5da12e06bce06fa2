use std::collections::HashSet;

use bookpromo::domain::Review;
use bookpromo::routes::ErrorBody;
use chrono::Utc;
use serde_json::{json, Value};

use crate::helpers::{spawn_app, spawn_app_with};

fn valid_review() -> Value {
    json!({
        "name": "Emma R.",
        "email": "emma.recovery@gmail.com",
        "rating": 5,
        "comment": "This book finally gave me answers.",
    })
}

#[tokio::test]
async fn list_reviews_on_an_empty_store_returns_an_empty_array() {
    let app = spawn_app().await;

    let response = app.get_reviews().await;

    assert_eq!(200, response.status().as_u16());
    let reviews: Vec<Value> = response.json().await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn create_review_returns_201_with_the_stored_record() {
    let app = spawn_app().await;
    let before = Utc::now();

    let response = app.post_reviews(&valid_review()).await;

    assert_eq!(201, response.status().as_u16());
    let created: Value = response.json().await.unwrap();
    for field in ["id", "name", "email", "rating", "comment", "createdAt"] {
        assert!(created.get(field).is_some(), "`{}` is missing", field);
    }
    let created: Review = serde_json::from_value(created).unwrap();
    assert_eq!(created.name, "Emma R.");
    assert_eq!(created.email, "emma.recovery@gmail.com");
    assert_eq!(created.rating, 5);
    assert_eq!(created.comment, "This book finally gave me answers.");
    assert!(created.created_at >= before);
}

#[tokio::test]
async fn a_created_review_is_listed() {
    let app = spawn_app().await;
    let created: Review = app.post_reviews(&valid_review()).await.json().await.unwrap();

    let reviews: Vec<Review> = app.get_reviews().await.json().await.unwrap();

    assert_eq!(reviews, vec![created]);
}

#[tokio::test]
async fn caller_supplied_id_and_timestamp_are_ignored() {
    let app = spawn_app().await;
    let mut body = valid_review();
    body["id"] = json!("my-own-id");
    body["createdAt"] = json!("2001-01-01T00:00:00Z");

    let created: Value = app.post_reviews(&body).await.json().await.unwrap();

    assert_ne!(created["id"], json!("my-own-id"));
    assert!(uuid::Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert_ne!(created["createdAt"], json!("2001-01-01T00:00:00Z"));
}

#[tokio::test]
async fn create_review_returns_400_when_data_is_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({"name": "Emma R.", "email": "e@x.com", "rating": 5}), "missing the comment"),
        (json!({"email": "e@x.com", "rating": 5, "comment": "Great"}), "missing the name"),
        (json!({"name": "Emma R.", "rating": 5, "comment": "Great"}), "missing the email"),
        (json!({"name": "Emma R.", "email": "e@x.com", "comment": "Great"}), "missing the rating"),
        (json!({"name": "Emma R.", "email": "e@x.com", "rating": "5", "comment": "Great"}), "a string rating"),
        (json!({"name": "Emma R.", "email": "e@x.com", "rating": 4.5, "comment": "Great"}), "a fractional rating"),
        (json!({"name": "Emma R.", "email": "e@x.com", "rating": 9, "comment": "Great"}), "an out of range rating"),
        (json!({"name": "Emma R.", "email": 12, "rating": 5, "comment": "Great"}), "a numeric email"),
        (json!({"name": "", "email": "e@x.com", "rating": 5, "comment": "Great"}), "an empty name"),
        (json!({"name": "Emma R.", "email": "e@x.com", "rating": 5, "comment": "   "}), "a blank comment"),
        (json!([]), "an array body"),
    ];

    for (body, description) in test_cases {
        let response = app.post_reviews(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let error: ErrorBody = response.json().await.unwrap();
        assert!(!error.error.is_empty(), "No message for {}", description);
    }

    let reviews: Vec<Value> = app.get_reviews().await.json().await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn the_error_message_names_the_missing_field() {
    let app = spawn_app().await;
    let body = json!({"name": "Emma R.", "email": "e@x.com", "rating": 5});

    let response = app.post_reviews(&body).await;

    assert_eq!(response.headers()["content-type"], "application/json");
    let error: ErrorBody = response.json().await.unwrap();
    assert!(error.error.contains("comment"), "got {:?}", error.error);
}

#[tokio::test]
async fn a_whole_number_written_as_a_float_is_a_valid_rating() {
    let app = spawn_app().await;
    let mut body = valid_review();
    body["rating"] = json!(5.0);

    let response = app.post_reviews(&body).await;

    assert_eq!(201, response.status().as_u16());
    let created: Review = response.json().await.unwrap();
    assert_eq!(created.rating, 5);
}

#[tokio::test]
async fn malformed_json_is_a_400_with_a_json_message() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("application/json", "{\"name\": ", "truncated JSON"),
        ("text/plain", "name=Emma", "a non-JSON content type"),
    ];

    for (content_type, body, description) in test_cases {
        let response = app
            .post_raw("/api/reviews", content_type, body.to_string())
            .await;

        assert_eq!(400, response.status().as_u16(), "{}", description);
        let error: ErrorBody = response.json().await.unwrap();
        assert!(!error.error.is_empty(), "{}", description);
    }
}

#[tokio::test]
async fn identical_reviews_get_distinct_ids() {
    let app = spawn_app().await;

    let first: Review = app.post_reviews(&valid_review()).await.json().await.unwrap();
    let second: Review = app.post_reviews(&valid_review()).await.json().await.unwrap();

    assert_ne!(first.id, second.id);
    let ids: HashSet<_> = app
        .get_reviews()
        .await
        .json::<Vec<Review>>()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, HashSet::from([first.id, second.id]));
}

#[tokio::test]
async fn concurrent_submissions_are_all_stored() {
    let app = spawn_app().await;
    let submissions = 25;

    let handles: Vec<_> = (0..submissions)
        .map(|i| {
            let client = app.api_client.clone();
            let url = format!("{}/api/reviews", &app.address);
            let mut body = valid_review();
            body["name"] = json!(format!("Reader {}", i));
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&body)
                    .send()
                    .await
                    .expect("Failed to execute request.")
                    .status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(201, handle.await.unwrap().as_u16());
    }

    let reviews: Vec<Review> = app.get_reviews().await.json().await.unwrap();
    assert_eq!(reviews.len(), submissions);
    let ids: HashSet<_> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), submissions);
}

#[tokio::test]
async fn reviews_are_listed_most_recent_first() {
    let app = spawn_app_with(|c| c.application.seed_sample_reviews = true).await;
    let created: Review = app.post_reviews(&valid_review()).await.json().await.unwrap();

    let reviews: Vec<Review> = app.get_reviews().await.json().await.unwrap();

    // Six launch reviews plus the new one.
    assert_eq!(reviews.len(), 7);
    assert_eq!(reviews[0].id, created.id);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}
