//! Access-gate middleware.

use crate::error::CatalogError;
use crate::gate::{AccessGate, API_KEY_HEADER};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Rejects the request with 401 unless it carries the configured key in `x-api-key`.
///
/// A header value that is not valid UTF-8 counts as absent.
pub async fn require_api_key(
    State(gate): State<AccessGate>,
    request: Request,
    next: Next,
) -> Result<Response, CatalogError> {
    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    gate.check(supplied)?;

    debug!("API key accepted");
    Ok(next.run(request).await)
}
