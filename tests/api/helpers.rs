use std::path::PathBuf;

use bookpromo::configuration::{get_configuration, Environment, Settings};
use bookpromo::startup::Application;
use bookpromo::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use serde_json::Value;

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, path))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_reviews(&self) -> reqwest::Response {
        self.get("/api/reviews").await
    }

    pub async fn post_reviews(&self, body: &Value) -> reqwest::Response {
        self.post_json("/api/reviews", body).await
    }

    pub async fn post_subscribe(&self, body: &Value) -> reqwest::Response {
        self.post_json("/api/subscribe", body).await
    }

    pub async fn get_subscribers(&self) -> reqwest::Response {
        self.get("/api/subscribers").await
    }
}

// Ensure that the tracing stack is only initialized once using once_cell
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = String::from("info");
    let subscriber_name = String::from("test");

    // If you want to see all the logs set TEST_LOG to true ex:
    // TEST_LOG=true cargo test reviews | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// A directory that is guaranteed not to exist.
pub fn missing_directory() -> PathBuf {
    std::env::temp_dir().join(format!("bookpromo-missing-{}", uuid::Uuid::new_v4()))
}

// Launch application in the background with an empty store and no client build
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // Initialize tracing stack only once!
    Lazy::force(&TRACING);

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.environment = Environment::Local;
        c.application.host = "127.0.0.1".into();
        c.application.port = 0;
        c.application.seed_sample_reviews = false;
        c.assets.directory = missing_directory();
        customise(&mut c);
        c
    };

    let application = Application::build(config)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        api_client: reqwest::Client::new(),
    }
}
