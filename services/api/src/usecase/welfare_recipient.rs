use anyhow::Context as _;
use chrono::Utc;
use tracing::info;

use keikakun_domain::approval::{ActionType, ResourceType};

use crate::domain::repository::{EmployeeRequestRepository, WelfareRecipientRepository};
use crate::domain::types::{AuthenticatedStaff, RecipientRegistration, RegistrationOutcome};
use crate::error::ApiServiceError;
use crate::usecase::restriction::{EmployeeRestriction, RestrictedAction};

pub struct CreateWelfareRecipientUseCase<W, E>
where
    W: WelfareRecipientRepository,
    E: EmployeeRequestRepository,
{
    pub recipients: W,
    pub restriction: EmployeeRestriction<E>,
}

impl<W, E> CreateWelfareRecipientUseCase<W, E>
where
    W: WelfareRecipientRepository,
    E: EmployeeRequestRepository,
{
    /// Register a recipient under the staff member's primary office, or file
    /// a pending request when the staff member's role needs approval.
    ///
    /// All input checks run before anything is written.
    pub async fn execute(
        &self,
        staff: &AuthenticatedStaff,
        registration: RecipientRegistration,
    ) -> Result<RegistrationOutcome, ApiServiceError> {
        if registration.has_missing_category() {
            return Err(ApiServiceError::RecipientCategoryMissing);
        }

        let office_id = staff
            .primary_office_id()
            .ok_or(ApiServiceError::RecipientMustHaveOffice)?;

        registration
            .validate_values(Utc::now().date_naive())
            .map_err(|message| ApiServiceError::InvalidValue(message.to_owned()))?;

        let request_data =
            serde_json::to_value(&registration).context("serialize recipient registration")?;
        let action = RestrictedAction {
            office_id,
            resource_type: ResourceType::WelfareRecipient,
            action_type: ActionType::Create,
            resource_id: None,
            request_data,
        };
        if let Some(request) = self.restriction.check(staff, action).await? {
            return Ok(RegistrationOutcome::PendingApproval {
                request_id: request.id,
            });
        }

        let recipient_id = self
            .recipients
            .create_with_details(office_id, &registration)
            .await?;

        info!(
            %recipient_id,
            %office_id,
            staff_id = %staff.staff.id,
            details = registration.disability_details.len(),
            "welfare recipient created"
        );
        Ok(RegistrationOutcome::Created { recipient_id })
    }
}
