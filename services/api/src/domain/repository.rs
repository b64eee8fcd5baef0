#![allow(async_fn_in_trait)]

use uuid::Uuid;

use keikakun_domain::billing::BillingStatus;

use crate::domain::types::{AuthenticatedStaff, EmployeeRequest, RecipientRegistration};
use crate::error::ApiServiceError;

/// Repository for staff accounts and their MFA state.
pub trait StaffRepository: Send + Sync {
    /// Load a staff member with office associations (primary first, then oldest).
    async fn find_authenticated(
        &self,
        id: Uuid,
    ) -> Result<Option<AuthenticatedStaff>, ApiServiceError>;

    /// Store `secret` as the pending TOTP secret, only while MFA is not enabled.
    /// Returns `false` if no row matched.
    async fn set_pending_mfa_secret(
        &self,
        staff_id: Uuid,
        secret: &str,
    ) -> Result<bool, ApiServiceError>;

    /// Set the enabled flag and replace recovery codes with `recovery_code_hashes`
    /// atomically (same transaction), only while MFA is still disabled and the
    /// pending secret is still `verified_secret`. Returns `false` if no row matched;
    /// nothing is written then.
    async fn enable_mfa(
        &self,
        staff_id: Uuid,
        verified_secret: &str,
        recovery_code_hashes: &[String],
    ) -> Result<bool, ApiServiceError>;

    /// Clear the secret, the enabled flag and all recovery codes atomically.
    async fn disable_mfa(&self, staff_id: Uuid) -> Result<(), ApiServiceError>;
}

pub trait OfficeRepository: Send + Sync {
    async fn find_billing_status(
        &self,
        office_id: Uuid,
    ) -> Result<Option<BillingStatus>, ApiServiceError>;
}

/// Repository for welfare recipients and their detail records.
pub trait WelfareRecipientRepository: Send + Sync {
    /// Insert the recipient, its office link, emergency contacts and disability
    /// details in one transaction. Returns the new recipient id.
    async fn create_with_details(
        &self,
        office_id: Uuid,
        registration: &RecipientRegistration,
    ) -> Result<Uuid, ApiServiceError>;
}

pub trait EmployeeRequestRepository: Send + Sync {
    async fn create(&self, request: &EmployeeRequest) -> Result<(), ApiServiceError>;
}
