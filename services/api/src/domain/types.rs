use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use keikakun_core::messages::ja;
use keikakun_domain::approval::{ActionType, RequestStatus, ResourceType};
use keikakun_domain::staff::StaffRole;

/// Staff member as seen by the API: credentials, role and MFA state.
#[derive(Debug, Clone)]
pub struct Staff {
    pub id: Uuid,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub hashed_password: String,
    pub role: StaffRole,
    pub is_mfa_enabled: bool,
    /// Base32 TOTP secret. Set at enrollment, cleared when MFA is disabled.
    pub mfa_secret: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeAssociation {
    pub office_id: Uuid,
    pub is_primary: bool,
}

/// Staff resolved from an access token together with their office associations,
/// ordered primary first, then oldest first.
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub staff: Staff,
    pub office_associations: Vec<OfficeAssociation>,
}

impl AuthenticatedStaff {
    /// The office every office-scoped action of this staff member applies to.
    pub fn primary_office_id(&self) -> Option<Uuid> {
        self.office_associations.first().map(|a| a.office_id)
    }
}

#[derive(Debug, Clone)]
pub struct MfaEnrollment {
    pub secret_key: String,
    pub qr_code_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    pub last_name: String,
    pub first_name: String,
    pub last_name_furigana: String,
    pub first_name_furigana: String,
    pub birth_day: NaiveDate,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactAddress {
    pub address: Option<String>,
    pub form_of_residence: Option<String>,
    pub tel: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub last_name: String,
    pub first_name: String,
    pub relationship: String,
    pub tel: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisabilityInfo {
    pub disability_or_disease_name: Option<String>,
    #[serde(default)]
    pub livelihood_protection: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisabilityDetail {
    /// Must name a `disability_category` enum value; the database rejects anything else.
    #[serde(default)]
    pub category: String,
    pub grade_or_level: Option<String>,
    pub application_status: Option<String>,
}

/// Everything submitted when registering a welfare recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientRegistration {
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub contact_address: ContactAddress,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(default)]
    pub disability_info: DisabilityInfo,
    #[serde(default)]
    pub disability_details: Vec<DisabilityDetail>,
}

impl RecipientRegistration {
    pub fn has_missing_category(&self) -> bool {
        self.disability_details
            .iter()
            .any(|d| d.category.trim().is_empty())
    }

    /// Field-level checks that need no database access.
    /// Returns the localized message of the first violation.
    pub fn validate_values(&self, today: NaiveDate) -> Result<(), &'static str> {
        let info = &self.basic_info;
        if info.last_name.trim().is_empty() || info.first_name.trim().is_empty() {
            return Err(ja::RECIPIENT_NAME_REQUIRED);
        }
        if info.birth_day > today {
            return Err(ja::RECIPIENT_BIRTH_DAY_IN_FUTURE);
        }
        Ok(())
    }
}

/// Pending approval ticket created instead of a direct write.
#[derive(Debug, Clone)]
pub struct EmployeeRequest {
    pub id: Uuid,
    pub requester_staff_id: Uuid,
    pub office_id: Uuid,
    pub resource_type: ResourceType,
    pub action_type: ActionType,
    pub resource_id: Option<Uuid>,
    pub request_data: serde_json::Value,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created { recipient_id: Uuid },
    PendingApproval { request_id: Uuid },
}
