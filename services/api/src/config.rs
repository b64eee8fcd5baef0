use serde::Deserialize;

use keikakun_core::config::Config;

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret that signs staff access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port to listen on (default 8000). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Issuer label shown in authenticator apps. Env var: `MFA_ISSUER`.
    #[serde(default = "default_mfa_issuer")]
    pub mfa_issuer: String,
}

fn default_api_port() -> u16 {
    8000
}

fn default_mfa_issuer() -> String {
    "Keikakun".to_owned()
}

impl Config for ApiConfig {}
