use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use keikakun_domain::approval::{ActionType, RequestStatus, ResourceType};

use crate::domain::repository::EmployeeRequestRepository;
use crate::domain::types::{AuthenticatedStaff, EmployeeRequest};
use crate::error::ApiServiceError;

/// Diverts writes by roles that need approval into pending employee requests.
pub struct EmployeeRestriction<E: EmployeeRequestRepository> {
    pub requests: E,
}

/// The write a staff member is attempting.
pub struct RestrictedAction {
    pub office_id: Uuid,
    pub resource_type: ResourceType,
    pub action_type: ActionType,
    pub resource_id: Option<Uuid>,
    pub request_data: serde_json::Value,
}

impl<E: EmployeeRequestRepository> EmployeeRestriction<E> {
    /// Returns the created request when the action was diverted, `None` when
    /// the staff member may perform it directly.
    pub async fn check(
        &self,
        staff: &AuthenticatedStaff,
        action: RestrictedAction,
    ) -> Result<Option<EmployeeRequest>, ApiServiceError> {
        if !staff.staff.role.requires_approval() {
            return Ok(None);
        }

        let request = EmployeeRequest {
            id: Uuid::now_v7(),
            requester_staff_id: staff.staff.id,
            office_id: action.office_id,
            resource_type: action.resource_type,
            action_type: action.action_type,
            resource_id: action.resource_id,
            request_data: action.request_data,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };
        self.requests.create(&request).await?;

        info!(
            request_id = %request.id,
            staff_id = %staff.staff.id,
            resource_type = request.resource_type.as_str(),
            action_type = request.action_type.as_str(),
            "employee request pending approval"
        );
        Ok(Some(request))
    }
}
