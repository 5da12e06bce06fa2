use std::net::TcpListener;
use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post, IntoMakeService, MethodRouter},
    Router, Server,
};
use hyper::server::conn::AddrIncoming;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::configuration::Settings;
use crate::middleware::RequestIdLayer;
use crate::routes::*;
use crate::store::Storage;
use crate::telemetry::TowerMakeSpanWithConstantId;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
}

type AppServer = Server<AddrIncoming, IntoMakeService<Router>>;

pub struct Application {
    port: u16,
    server: AppServer,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let storage = if configuration.application.seed_sample_reviews {
            Storage::with_sample_reviews()?
        } else {
            Storage::new()
        };
        let site = site_service(&configuration.assets, configuration.environment)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, Arc::new(storage), site)?;
        tracing::info!(
            port,
            environment = configuration.environment.as_str(),
            "serving on port {}",
            port
        );
        Ok(Self { port, server })
    }

    /// The port actually bound, useful when the configuration asked for port 0.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> hyper::Result<()> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    storage: Arc<Storage>,
    site: MethodRouter,
) -> hyper::Result<AppServer> {
    let app = app_router(storage, site);
    Ok(axum::Server::from_tcp(listener)?.serve(app.into_make_service()))
}

pub fn app_router(storage: Arc<Storage>, site: MethodRouter) -> Router {
    let app_state = AppState { storage };
    Router::new()
        .route("/health_check", get(health_check))
        .route(
            "/api/reviews",
            get(list_reviews)
                .post(create_review)
                .fallback(method_not_allowed),
        )
        .route("/api/subscribe", post(subscribe).fallback(method_not_allowed))
        .route(
            "/api/subscribers",
            get(list_subscribers).fallback(method_not_allowed),
        )
        .fallback(move |request: Request<Body>| serve_site(site.clone(), request))
        .with_state(app_state)
        // A span is created for each request and ends with the response is sent
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(TowerMakeSpanWithConstantId)
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestIdLayer)
}
