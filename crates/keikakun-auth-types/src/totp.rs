//! TOTP secrets, provisioning URIs and code verification (RFC 6238).

use totp_rs::{Algorithm, Secret, TOTP};

/// Digits per code.
pub const TOTP_DIGITS: usize = 6;

/// Seconds per time step.
pub const TOTP_STEP_SECS: u64 = 30;

/// Accepted clock drift in steps on either side of now.
pub const TOTP_SKEW: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum TotpError {
    #[error("invalid totp secret: {0}")]
    InvalidSecret(String),
    #[error("invalid totp parameters: {0}")]
    InvalidParameters(String),
    #[error("system clock before unix epoch")]
    Clock,
}

/// Generate a fresh 160-bit secret, base32 encoded for manual entry.
pub fn generate_totp_secret() -> String {
    Secret::generate_secret().to_encoded().to_string()
}

fn build(secret: &str, issuer: Option<String>, account: String) -> Result<TOTP, TotpError> {
    let bytes = Secret::Encoded(secret.to_owned())
        .to_bytes()
        .map_err(|e| TotpError::InvalidSecret(format!("{e:?}")))?;
    TOTP::new(
        Algorithm::SHA1,
        TOTP_DIGITS,
        TOTP_SKEW,
        TOTP_STEP_SECS,
        bytes,
        issuer,
        account,
    )
    .map_err(|e| TotpError::InvalidParameters(format!("{e:?}")))
}

/// Build the `otpauth://totp/...` URI an authenticator app scans as a QR code.
///
/// `:` separates issuer and account in the label, so it is dropped from both.
pub fn totp_uri(secret: &str, issuer: &str, account: &str) -> Result<String, TotpError> {
    Ok(build(secret, Some(label_part(issuer)), label_part(account))?.get_url())
}

fn label_part(value: &str) -> String {
    value.replace(':', "")
}

/// Check `code` against `secret` at the current time, allowing [`TOTP_SKEW`].
///
/// Surrounding whitespace is ignored. Anything that is not exactly
/// [`TOTP_DIGITS`] ASCII digits is rejected without consulting the clock.
pub fn verify_totp(secret: &str, code: &str) -> Result<bool, TotpError> {
    let code = code.trim();
    if code.len() != TOTP_DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(false);
    }
    build(secret, None, String::new())?
        .check_current(code)
        .map_err(|_| TotpError::Clock)
}

/// The code an authenticator app would show for `secret` right now.
pub fn current_totp_code(secret: &str) -> Result<String, TotpError> {
    build(secret, None, String::new())?
        .generate_current()
        .map_err(|_| TotpError::Clock)
}
