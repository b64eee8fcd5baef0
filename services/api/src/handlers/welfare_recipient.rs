use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use keikakun_core::messages::ja;

use crate::domain::types::{RecipientRegistration, RegistrationOutcome};
use crate::error::ApiServiceError;
use crate::extract::{ActiveBillingStaff, ApiJson};
use crate::state::AppState;
use crate::usecase::restriction::EmployeeRestriction;
use crate::usecase::welfare_recipient::CreateWelfareRecipientUseCase;

// ── POST /api/v1/welfare-recipients ──────────────────────────────────────────

#[derive(Serialize)]
pub struct UserRegistrationResponse {
    pub success: bool,
    pub message: &'static str,
    pub recipient_id: Uuid,
    pub support_plan_created: bool,
}

#[derive(Serialize)]
pub struct PendingRequestResponse {
    pub success: bool,
    pub message: &'static str,
    pub request_id: Uuid,
    pub support_plan_created: bool,
}

impl IntoResponse for RegistrationOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Created { recipient_id } => (
                StatusCode::CREATED,
                Json(UserRegistrationResponse {
                    success: true,
                    message: ja::RECIPIENT_CREATE_SUCCESS,
                    recipient_id,
                    support_plan_created: false,
                }),
            )
                .into_response(),
            Self::PendingApproval { request_id } => (
                StatusCode::ACCEPTED,
                Json(PendingRequestResponse {
                    success: true,
                    message: ja::EMPLOYEE_REQUEST_PENDING,
                    request_id,
                    support_plan_created: false,
                }),
            )
                .into_response(),
        }
    }
}

pub async fn create_welfare_recipient(
    State(state): State<AppState>,
    ActiveBillingStaff(current): ActiveBillingStaff,
    ApiJson(body): ApiJson<RecipientRegistration>,
) -> Result<RegistrationOutcome, ApiServiceError> {
    let usecase = CreateWelfareRecipientUseCase {
        recipients: state.welfare_recipient_repo(),
        restriction: EmployeeRestriction {
            requests: state.employee_request_repo(),
        },
    };
    usecase.execute(&current, body).await
}
