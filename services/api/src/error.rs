use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use keikakun_core::messages::ja;

/// API service error variants. `Display` is the localized message sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("{}", ja::AUTH_COULD_NOT_VALIDATE)]
    Unauthorized,
    #[error("{}", ja::AUTH_STAFF_NOT_FOUND)]
    StaffNotFound,
    #[error("{}", ja::BILLING_INACTIVE)]
    BillingInactive,
    #[error("{}", ja::MFA_ALREADY_ENABLED)]
    MfaAlreadyEnabled,
    #[error("{}", ja::MFA_NOT_ENROLLED)]
    MfaNotEnrolled,
    #[error("{}", ja::MFA_NOT_ENABLED)]
    MfaNotEnabled,
    #[error("{}", ja::MFA_INVALID_CODE)]
    InvalidTotpCode,
    #[error("{}", ja::AUTH_INCORRECT_PASSWORD)]
    IncorrectPassword,
    #[error("{}", ja::RECIPIENT_CATEGORY_MISSING)]
    RecipientCategoryMissing,
    #[error("{}", ja::RECIPIENT_MUST_HAVE_OFFICE)]
    RecipientMustHaveOffice,
    #[error("{}", ja::RECIPIENT_DISABILITY_CATEGORY_MISSING)]
    DisabilityCategoryInvalid,
    #[error("{}", ja::RECIPIENT_INVALID_INPUT)]
    InvalidInput,
    #[error("{0}")]
    InvalidValue(String),
    /// Body missing, not JSON, or not the expected shape.
    #[error("{}", ja::REQUEST_BODY_INVALID)]
    InvalidBody(#[from] JsonRejection),
    #[error("{}", ja::INTERNAL_SERVER_ERROR)]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::StaffNotFound => "STAFF_NOT_FOUND",
            Self::BillingInactive => "BILLING_INACTIVE",
            Self::MfaAlreadyEnabled => "MFA_ALREADY_ENABLED",
            Self::MfaNotEnrolled => "MFA_NOT_ENROLLED",
            Self::MfaNotEnabled => "MFA_NOT_ENABLED",
            Self::InvalidTotpCode => "INVALID_TOTP_CODE",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::RecipientCategoryMissing => "RECIPIENT_CATEGORY_MISSING",
            Self::RecipientMustHaveOffice => "RECIPIENT_MUST_HAVE_OFFICE",
            Self::DisabilityCategoryInvalid => "DISABILITY_CATEGORY_INVALID",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidValue(_) => "INVALID_VALUE",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidTotpCode | Self::IncorrectPassword => {
                StatusCode::UNAUTHORIZED
            }
            Self::StaffNotFound => StatusCode::NOT_FOUND,
            Self::BillingInactive => StatusCode::PAYMENT_REQUIRED,
            Self::RecipientMustHaveOffice => StatusCode::FORBIDDEN,
            Self::MfaAlreadyEnabled
            | Self::MfaNotEnrolled
            | Self::MfaNotEnabled
            | Self::RecipientCategoryMissing
            | Self::DisabilityCategoryInvalid
            | Self::InvalidInput
            | Self::InvalidValue(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // TraceLayer records every response status; only the anyhow chain of a
        // 500 is worth logging here, and it never reaches the client.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
