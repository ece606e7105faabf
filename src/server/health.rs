//! Liveness endpoint for load balancers and orchestration probes.

use axum::http::StatusCode;

/// Returns 200 OK with a plain "OK" body when the server is accepting
/// connections.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = health_handler().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
