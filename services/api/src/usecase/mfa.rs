use tracing::{info, warn};

use keikakun_auth_types::password::verify_password;
use keikakun_auth_types::recovery::{
    RECOVERY_CODE_COUNT, generate_recovery_codes, hash_recovery_code,
};
use keikakun_auth_types::totp::{generate_totp_secret, totp_uri, verify_totp};

use crate::domain::repository::StaffRepository;
use crate::domain::types::{MfaEnrollment, Staff};
use crate::error::ApiServiceError;

// ── EnrollMfa ────────────────────────────────────────────────────────────────

pub struct EnrollMfaUseCase<S: StaffRepository> {
    pub staffs: S,
    pub issuer: String,
}

impl<S: StaffRepository> EnrollMfaUseCase<S> {
    /// Generate a fresh TOTP secret and store it as pending. A pending secret
    /// from an earlier, unverified enrollment is replaced.
    pub async fn execute(&self, staff: &Staff) -> Result<MfaEnrollment, ApiServiceError> {
        if staff.is_mfa_enabled {
            return Err(ApiServiceError::MfaAlreadyEnabled);
        }

        let secret = generate_totp_secret();
        let qr_code_uri = totp_uri(&secret, &self.issuer, &staff.email)
            .map_err(|e| ApiServiceError::Internal(e.into()))?;

        // The write is conditional on MFA still being disabled.
        if !self.staffs.set_pending_mfa_secret(staff.id, &secret).await? {
            return Err(ApiServiceError::MfaAlreadyEnabled);
        }

        info!(staff_id = %staff.id, "mfa enrollment started");
        Ok(MfaEnrollment {
            secret_key: secret,
            qr_code_uri,
        })
    }
}

// ── VerifyMfa ────────────────────────────────────────────────────────────────

pub struct VerifyMfaUseCase<S: StaffRepository> {
    pub staffs: S,
}

impl<S: StaffRepository> VerifyMfaUseCase<S> {
    /// Check `totp_code` against the pending secret and enable MFA.
    /// Returns the plaintext recovery codes; only their hashes are stored.
    pub async fn execute(
        &self,
        staff: &Staff,
        totp_code: &str,
    ) -> Result<Vec<String>, ApiServiceError> {
        if staff.is_mfa_enabled {
            return Err(ApiServiceError::MfaAlreadyEnabled);
        }
        let secret = staff
            .mfa_secret
            .as_deref()
            .ok_or(ApiServiceError::MfaNotEnrolled)?;

        let valid =
            verify_totp(secret, totp_code).map_err(|e| ApiServiceError::Internal(e.into()))?;
        if !valid {
            warn!(staff_id = %staff.id, "mfa verification failed");
            return Err(ApiServiceError::InvalidTotpCode);
        }

        let recovery_codes = generate_recovery_codes(RECOVERY_CODE_COUNT);
        let hashes: Vec<String> = recovery_codes
            .iter()
            .map(|c| hash_recovery_code(c))
            .collect();
        // Another request enabled MFA or re-enrolled since `staff` was loaded.
        if !self.staffs.enable_mfa(staff.id, secret, &hashes).await? {
            warn!(staff_id = %staff.id, "mfa state changed during verification");
            return Err(ApiServiceError::MfaAlreadyEnabled);
        }

        info!(staff_id = %staff.id, "mfa enabled");
        Ok(recovery_codes)
    }
}

// ── DisableMfa ───────────────────────────────────────────────────────────────

pub struct DisableMfaUseCase<S: StaffRepository> {
    pub staffs: S,
}

impl<S: StaffRepository> DisableMfaUseCase<S> {
    pub async fn execute(&self, staff: &Staff, password: &str) -> Result<(), ApiServiceError> {
        if !staff.is_mfa_enabled {
            return Err(ApiServiceError::MfaNotEnabled);
        }

        let matches = verify_password(password, &staff.hashed_password)
            .map_err(|e| ApiServiceError::Internal(e.into()))?;
        if !matches {
            warn!(staff_id = %staff.id, "mfa disable rejected: wrong password");
            return Err(ApiServiceError::IncorrectPassword);
        }

        self.staffs.disable_mfa(staff.id).await?;
        info!(staff_id = %staff.id, "mfa disabled");
        Ok(())
    }
}
