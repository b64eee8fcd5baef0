//! JWT access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "token-issuer", test))]
use serde::Serialize;
use uuid::Uuid;

/// Staff identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub staff_id: Uuid,
    pub access_token_exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[cfg(any(feature = "token-issuer", test))]
    #[error("token encoding failed")]
    Encoding,
}

/// JWT claims payload of a staff access token.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | staff ID (UUID string) |
/// | `exp` | `exp` | expiration, seconds since epoch |
///
/// [`Serialize`] requires the **`token-issuer`** feature; services only
/// ever decode.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "token-issuer", test), derive(Serialize))]
pub struct JwtClaims {
    pub sub: String,
    pub exp: u64,
}

/// Validate an access token, returning the staff identity it carries.
///
/// Validation: HS256, `exp` checked with the default 60s leeway, required
/// claims `exp` + `sub`.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let staff_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        staff_id,
        access_token_exp: data.claims.exp,
    })
}

/// Sign an access token for `staff_id` expiring at `exp` (seconds since epoch).
#[cfg(any(feature = "token-issuer", test))]
pub fn issue_access_token(staff_id: Uuid, exp: u64, secret: &str) -> Result<String, AuthError> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = JwtClaims {
        sub: staff_id.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Encoding)
}
