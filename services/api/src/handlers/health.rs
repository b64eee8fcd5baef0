use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// GET /healthz: liveness check. Always 200 while the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz: readiness check. 503 until the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
