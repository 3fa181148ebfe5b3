//! Liveness check.

/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
