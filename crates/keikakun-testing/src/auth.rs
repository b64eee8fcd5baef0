//! Mock auth helpers for integration tests.
//!
//! The API authenticates staff from an HS256 access token carried in the
//! `Authorization` header or the `access_token` cookie. `MockAuth` signs such
//! tokens with a test secret so requests can be built without a login flow.

use std::time::{SystemTime, UNIX_EPOCH};

use http::header::{AUTHORIZATION, COOKIE};
use http::{HeaderMap, HeaderValue};
use uuid::Uuid;

use keikakun_auth_types::credentials::ACCESS_TOKEN_COOKIE;
use keikakun_auth_types::token::issue_access_token;

/// Secret shared between `MockAuth` and the service under test.
pub const TEST_JWT_SECRET: &str = "keikakun-test-jwt-secret";

/// Staff identity that test requests authenticate as.
pub struct MockAuth {
    pub staff_id: Uuid,
    pub secret: String,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

impl MockAuth {
    pub fn new(staff_id: Uuid) -> Self {
        Self {
            staff_id,
            secret: TEST_JWT_SECRET.to_owned(),
        }
    }

    /// Token valid for one hour.
    pub fn access_token(&self) -> String {
        self.token_expiring_at(now_secs() + 3600)
    }

    /// Token that expired an hour ago, beyond the validation leeway.
    pub fn expired_token(&self) -> String {
        self.token_expiring_at(now_secs() - 3600)
    }

    pub fn token_expiring_at(&self, exp: u64) -> String {
        issue_access_token(self.staff_id, exp, &self.secret).expect("sign test token")
    }

    /// `Authorization: Bearer <token>` headers.
    pub fn bearer_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.access_token())).unwrap(),
        );
        map
    }

    /// `Cookie: access_token=<token>` headers.
    pub fn cookie_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{ACCESS_TOKEN_COOKIE}={}", self.access_token()))
                .unwrap(),
        );
        map
    }
}
