//! Authentication extractors.
//!
//! Handlers take [`CurrentStaff`] or [`ActiveBillingStaff`] as an argument;
//! a rejected request never reaches the handler body. [`ApiJson`] reports
//! body rejections in the same `{kind, message}` shape as service errors.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use keikakun_auth_types::credentials::access_token_from_headers;

use crate::domain::types::AuthenticatedStaff;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::auth::{RequireActiveBillingUseCase, ResolveStaffUseCase};

/// Staff member authenticated by the request's access token.
#[derive(Debug, Clone)]
pub struct CurrentStaff(pub AuthenticatedStaff);

impl FromRequestParts<AppState> for CurrentStaff {
    type Rejection = ApiServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = access_token_from_headers(&parts.headers);
        let usecase = ResolveStaffUseCase {
            staffs: state.staff_repo(),
            jwt_secret: state.jwt_secret.clone(),
        };
        async move { usecase.execute(token.as_deref()).await.map(Self) }
    }
}

/// [`CurrentStaff`] whose primary office is in good billing standing.
#[derive(Debug, Clone)]
pub struct ActiveBillingStaff(pub AuthenticatedStaff);

impl FromRequestParts<AppState> for ActiveBillingStaff {
    type Rejection = ApiServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = access_token_from_headers(&parts.headers);
        let resolve = ResolveStaffUseCase {
            staffs: state.staff_repo(),
            jwt_secret: state.jwt_secret.clone(),
        };
        let billing = RequireActiveBillingUseCase {
            offices: state.office_repo(),
        };
        async move {
            let staff = resolve.execute(token.as_deref()).await?;
            billing.execute(&staff).await?;
            Ok(Self(staff))
        }
    }
}

/// `axum::Json` whose rejection is an [`ApiServiceError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiServiceError))]
pub struct ApiJson<T>(pub T);
