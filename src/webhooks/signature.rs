//! HMAC-SHA256 webhook signature primitives.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Parses a `sha256=<hex>` signature header into raw bytes.
///
/// Returns `None` for a missing prefix, a different algorithm, or invalid
/// hex. Never panics.
pub fn parse_signature_header(header: &str) -> Option<Vec<u8>> {
    let hex_sig = header.strip_prefix("sha256=")?;
    hex::decode(hex_sig).ok()
}

/// Computes the HMAC-SHA256 of a payload under the given secret.
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// Formats raw signature bytes as a `sha256=<hex>` header value.
pub fn format_signature_header(signature: &[u8]) -> String {
    format!("sha256={}", hex::encode(signature))
}

/// Verifies a signature header against the payload and secret.
///
/// The comparison is constant-time (via the HMAC library's verify), so a
/// mismatching signature leaks nothing about the expected value. Malformed
/// headers simply fail verification.
pub fn verify_signature(payload: &[u8], signature_header: &str, secret: &[u8]) -> bool {
    let Some(claimed) = parse_signature_header(signature_header) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    mac.verify_slice(&claimed).is_ok()
}
