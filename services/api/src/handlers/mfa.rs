use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use keikakun_core::messages::ja;

use crate::error::ApiServiceError;
use crate::extract::{ApiJson, CurrentStaff};
use crate::state::AppState;
use crate::usecase::mfa::{DisableMfaUseCase, EnrollMfaUseCase, VerifyMfaUseCase};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /api/v1/auth/mfa/enroll ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct MfaEnrollmentResponse {
    pub secret_key: String,
    pub qr_code_uri: String,
}

pub async fn enroll_mfa(
    State(state): State<AppState>,
    CurrentStaff(current): CurrentStaff,
) -> Result<Json<MfaEnrollmentResponse>, ApiServiceError> {
    let usecase = EnrollMfaUseCase {
        staffs: state.staff_repo(),
        issuer: state.mfa_issuer.clone(),
    };
    let enrollment = usecase.execute(&current.staff).await?;
    Ok(Json(MfaEnrollmentResponse {
        secret_key: enrollment.secret_key,
        qr_code_uri: enrollment.qr_code_uri,
    }))
}

// ── POST /api/v1/auth/mfa/verify ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MfaVerifyRequest {
    pub totp_code: String,
}

#[derive(Serialize)]
pub struct MfaVerifyResponse {
    pub message: &'static str,
    pub recovery_codes: Vec<String>,
}

pub async fn verify_mfa(
    State(state): State<AppState>,
    CurrentStaff(current): CurrentStaff,
    ApiJson(body): ApiJson<MfaVerifyRequest>,
) -> Result<Json<MfaVerifyResponse>, ApiServiceError> {
    let usecase = VerifyMfaUseCase {
        staffs: state.staff_repo(),
    };
    let recovery_codes = usecase.execute(&current.staff, &body.totp_code).await?;
    Ok(Json(MfaVerifyResponse {
        message: ja::MFA_VERIFICATION_SUCCESS,
        recovery_codes,
    }))
}

// ── POST /api/v1/auth/mfa/disable ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MfaDisableRequest {
    pub password: String,
}

pub async fn disable_mfa(
    State(state): State<AppState>,
    CurrentStaff(current): CurrentStaff,
    ApiJson(body): ApiJson<MfaDisableRequest>,
) -> Result<Json<MessageResponse>, ApiServiceError> {
    let usecase = DisableMfaUseCase {
        staffs: state.staff_repo(),
    };
    usecase.execute(&current.staff, &body.password).await?;
    Ok(Json(MessageResponse {
        message: ja::MFA_DISABLED_SUCCESS,
    }))
}
