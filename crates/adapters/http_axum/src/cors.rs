//! Cross-origin policy for the browser front-end.

use axum::http::header::{self, InvalidHeaderValue};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origin of the development front-end.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Build a [`CorsLayer`] that lets `allowed_origins` call the API with
/// `GET`, `POST`, `DELETE` and `OPTIONS`, sending a `Content-Type` header.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] if an origin is not a valid header value.
///
/// # Panics
///
/// Panics if an origin is the wildcard `*`; callers reject it up front.
pub fn layer<I, S>(allowed_origins: I) -> Result<CorsLayer, InvalidHeaderValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let origins = allowed_origins
        .into_iter()
        .map(|origin| HeaderValue::from_str(origin.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
