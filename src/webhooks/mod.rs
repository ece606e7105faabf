//! Inbound webhook authentication.
//!
//! GitHub signs webhook deliveries with HMAC-SHA256 over the raw body, sent
//! as `X-Hub-Signature-256: sha256=<hex>`. `signature` holds the primitives;
//! `guard` wraps them as an axum middleware for webhook-receiving routes.

pub mod guard;
pub mod signature;

pub use guard::{require_signature, GuardError};
pub use signature::{
    compute_signature, format_signature_header, parse_signature_header, verify_signature,
};
