use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use keikakun_core::middleware::request_id_layer;

use crate::handlers::{
    health::{healthz, readyz},
    mfa::{disable_mfa, enroll_mfa, verify_mfa},
    welfare_recipient::create_welfare_recipient,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // MFA
        .route("/api/v1/auth/mfa/enroll", post(enroll_mfa))
        .route("/api/v1/auth/mfa/verify", post(verify_mfa))
        .route("/api/v1/auth/mfa/disable", post(disable_mfa))
        // Welfare recipients
        .route("/api/v1/welfare-recipients", post(create_welfare_recipient))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
