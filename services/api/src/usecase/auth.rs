use anyhow::anyhow;
use tracing::warn;

use keikakun_auth_types::token::validate_access_token;

use crate::domain::repository::{OfficeRepository, StaffRepository};
use crate::domain::types::AuthenticatedStaff;
use crate::error::ApiServiceError;

// ── ResolveStaff ─────────────────────────────────────────────────────────────

/// Resolves the staff member behind an access token.
pub struct ResolveStaffUseCase<S: StaffRepository> {
    pub staffs: S,
    pub jwt_secret: String,
}

impl<S: StaffRepository> ResolveStaffUseCase<S> {
    pub async fn execute(&self, token: Option<&str>) -> Result<AuthenticatedStaff, ApiServiceError> {
        let token = token.ok_or(ApiServiceError::Unauthorized)?;
        let info = validate_access_token(token, &self.jwt_secret).map_err(|e| {
            warn!(error = %e, "access token rejected");
            ApiServiceError::Unauthorized
        })?;

        self.staffs
            .find_authenticated(info.staff_id)
            .await?
            .ok_or(ApiServiceError::Unauthorized)
    }
}

// ── RequireActiveBilling ─────────────────────────────────────────────────────

/// Rejects staff whose primary office is not in good billing standing.
/// Staff without an office pass; office-scoped operations reject them later.
pub struct RequireActiveBillingUseCase<O: OfficeRepository> {
    pub offices: O,
}

impl<O: OfficeRepository> RequireActiveBillingUseCase<O> {
    pub async fn execute(&self, staff: &AuthenticatedStaff) -> Result<(), ApiServiceError> {
        let Some(office_id) = staff.primary_office_id() else {
            return Ok(());
        };

        let status = self
            .offices
            .find_billing_status(office_id)
            .await?
            .ok_or_else(|| anyhow!("office {office_id} of staff {} missing", staff.staff.id))?;

        if !status.is_active() {
            warn!(%office_id, billing_status = status.as_str(), "billing inactive");
            return Err(ApiServiceError::BillingInactive);
        }
        Ok(())
    }
}
