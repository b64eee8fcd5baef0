use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;
use uuid::Uuid;

use keikakun_api::router::build_router;
use keikakun_api::state::AppState;
use keikakun_testing::auth::{MockAuth, TEST_JWT_SECRET};
use keikakun_testing::fixture::registration_body;

/// Router over a connection that was never opened. Requests rejected before
/// any query still behave exactly as in production.
fn router() -> axum::Router {
    build_router(AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        mfa_issuer: "Keikakun".to_owned(),
    })
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn should_answer_liveness_check() {
    let resp = router()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let resp = router()
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_mfa_enrollment_without_token() {
    let resp = router()
        .oneshot(
            Request::post("/api/v1/auth/mfa/enroll")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_recipient_creation_with_foreign_token() {
    let mut auth = MockAuth::new(Uuid::new_v4());
    auth.secret = "not-the-service-secret".to_owned();
    let body = registration_body(&["physical_handbook"]).to_string();

    let resp = router()
        .oneshot(
            Request::post("/api/v1/welfare-recipients")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", auth.access_token()))
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_expired_cookie_token() {
    let auth = MockAuth::new(Uuid::new_v4());
    let resp = router()
        .oneshot(
            Request::post("/api/v1/auth/mfa/verify")
                .header("content-type", "application/json")
                .header("cookie", format!("access_token={}", auth.expired_token()))
                .body(Body::from(r#"{"totp_code":"123456"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
