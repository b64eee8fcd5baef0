use sea_orm::Database;
use tracing::info;

use keikakun_api::config::ApiConfig;
use keikakun_api::router::build_router;
use keikakun_api::state::AppState;
use keikakun_core::config::Config;
use keikakun_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("info,sea_orm=warn,tower_http=info");

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        mfa_issuer: config.mfa_issuer,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
