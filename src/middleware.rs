use std::task::{Context, Poll};

use http::{HeaderValue, Request};
use tower_layer::Layer;
use tower_service::Service;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Makes sure every request carries an `x-request-id` header before it reaches
/// tracing and the handlers. An id supplied by the client is kept as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestId<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestId { inner }
    }
}

#[derive(Clone, Debug)]
pub struct RequestId<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestId<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(REQUEST_ID_HEADER) {
            // A hyphenated uuid is always a valid header value.
            if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
                request.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
        }
        self.inner.call(request)
    }
}
