use std::convert::Infallible;
use std::future::poll_fn;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, get_service, MethodRouter},
    Json,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_service::Service;

use crate::configuration::{AssetSettings, Environment};
use crate::routes::{api_not_found, ErrorBody};

/// Picks what answers requests outside the API.
///
/// A built client in `assets.directory` is served as static files, with the
/// index page standing in for any path that is not a file so client-side
/// routes work on reload. Without a build, production refuses to start while
/// local development falls back to a placeholder page.
pub fn site_service(
    assets: &AssetSettings,
    environment: Environment,
) -> Result<MethodRouter, anyhow::Error> {
    if assets.directory.is_dir() {
        let serve_dir =
            ServeDir::new(&assets.directory).fallback(ServeFile::new(assets.index_path()));
        return Ok(get_service(serve_dir).handle_error(asset_error));
    }
    match environment {
        Environment::Production => Err(anyhow::anyhow!(
            "Could not find the build directory: {}, make sure to build the client first",
            assets.directory.display()
        )),
        Environment::Local => {
            tracing::warn!(
                directory = %assets.directory.display(),
                "No client build found, serving the placeholder page"
            );
            Ok(get(placeholder))
        }
    }
}

/// Router fallback: anything no route claimed.
pub async fn serve_site(mut site: MethodRouter, request: Request<Body>) -> Response {
    if is_api_path(request.uri().path()) {
        return api_not_found().await.into_response();
    }
    if let Err(never) = poll_fn(|cx| Service::<Request<Body>>::poll_ready(&mut site, cx)).await {
        return unreachable(never);
    }
    match Service::<Request<Body>>::call(&mut site, request).await {
        Ok(response) => response,
        Err(never) => unreachable(never),
    }
}

fn unreachable(never: Infallible) -> Response {
    match never {}
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

async fn placeholder() -> (StatusCode, Html<&'static str>) {
    (StatusCode::OK, Html(include_str!("placeholder.html")))
}

async fn asset_error(error: std::io::Error) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!(error = %error, "Failed to read a site asset");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Failed to load the site")),
    )
}
