use http::Request;
use tower_http::trace::MakeSpan;
use tracing::{subscriber::set_global_default, Span, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

use crate::middleware::REQUEST_ID_HEADER;

/// Compose multiple layers into a `tracing`'s subscriber.
///
/// `RUST_LOG` wins over `env_filter` when it is set. The sink is generic so
/// tests can swallow the output with `std::io::sink`.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register a subscriber as global default to process span data.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Opens one span per request, tagged with the id the request-id layer assigned,
/// so every log line emitted while handling it carries the same `request_id`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TowerMakeSpanWithConstantId;

impl<B> MakeSpan<B> for TowerMakeSpanWithConstantId {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown");
        tracing::info_span!(
            "HTTP request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}
