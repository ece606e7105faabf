//! Signature-verification middleware for webhook routes.
//!
//! Rejects requests whose `X-Hub-Signature-256` header does not match the
//! HMAC-SHA256 of the raw body under the configured secret, before the
//! wrapped handler runs. Layer it onto a webhook-receiving route with
//! `axum::middleware::from_fn_with_state`; none of the post-dispatch routes
//! use it.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use super::verify_signature;
use crate::server::AppState;

const HEADER_SIGNATURE: &str = "x-hub-signature-256";

/// Errors produced by the signature guard.
#[derive(Debug, Error)]
pub enum GuardError {
    /// No webhook secret in the configuration. A server problem, not the
    /// caller's.
    #[error("Webhook secret not configured")]
    SecretNotConfigured,

    /// The signature header is absent.
    #[error("No signature header")]
    MissingSignature,

    /// The signature does not match the body.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The request body could not be read.
    #[error("Unreadable request body")]
    UnreadableBody,
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        let status = match &self {
            GuardError::SecretNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            GuardError::MissingSignature | GuardError::InvalidSignature => {
                StatusCode::UNAUTHORIZED
            }
            GuardError::UnreadableBody => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Verifies the webhook signature before running the wrapped handler.
///
/// The body is buffered in full to compute the HMAC, then replayed into the
/// request so the inner handler sees it unchanged. On a verified match the
/// handler's response passes through untouched.
pub async fn require_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, GuardError> {
    let secret = state
        .webhook_secret()
        .ok_or(GuardError::SecretNotConfigured)?
        .to_vec();

    let (parts, body) = request.into_parts();

    let signature_header = parts
        .headers
        .get(HEADER_SIGNATURE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .ok_or(GuardError::MissingSignature)?;

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|_| GuardError::UnreadableBody)?;

    if !verify_signature(&bytes, &signature_header, &secret) {
        warn!(uri = %parts.uri, "Rejected webhook with invalid signature");
        return Err(GuardError::InvalidSignature);
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
