use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use keikakun_api::domain::repository::{
    EmployeeRequestRepository, OfficeRepository, StaffRepository, WelfareRecipientRepository,
};
use keikakun_api::domain::types::{
    AuthenticatedStaff, EmployeeRequest, OfficeAssociation, RecipientRegistration, Staff,
};
use keikakun_api::error::ApiServiceError;
use keikakun_auth_types::password::hash_password;
use keikakun_domain::billing::BillingStatus;
use keikakun_domain::staff::StaffRole;
use keikakun_testing::fixture::registration_body;

pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_ISSUER: &str = "Keikakun";

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_staff(role: StaffRole) -> Staff {
    Staff {
        id: Uuid::new_v4(),
        email: "staff@example.com".to_owned(),
        last_name: "佐藤".to_owned(),
        first_name: "一郎".to_owned(),
        hashed_password: hash_password(TEST_PASSWORD).unwrap(),
        role,
        is_mfa_enabled: false,
        mfa_secret: None,
    }
}

/// `staff` associated with `offices`, the first one primary.
pub fn authenticated(staff: Staff, offices: &[Uuid]) -> AuthenticatedStaff {
    AuthenticatedStaff {
        staff,
        office_associations: offices
            .iter()
            .enumerate()
            .map(|(i, id)| OfficeAssociation {
                office_id: *id,
                is_primary: i == 0,
            })
            .collect(),
    }
}

pub fn test_registration(categories: &[&str]) -> RecipientRegistration {
    serde_json::from_value(registration_body(categories)).unwrap()
}

// ── MockStaffRepo ────────────────────────────────────────────────────────────

pub struct MockStaffRepo {
    pub staffs: Arc<Mutex<Vec<AuthenticatedStaff>>>,
    pub recovery_hashes: Arc<Mutex<HashMap<Uuid, Vec<String>>>>,
}

impl MockStaffRepo {
    pub fn new(staffs: Vec<AuthenticatedStaff>) -> Self {
        Self {
            staffs: Arc::new(Mutex::new(staffs)),
            recovery_hashes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_staff(staff: Staff) -> Self {
        Self::new(vec![authenticated(staff, &[])])
    }

    /// Current stored state of a staff member.
    pub fn staff(&self, id: Uuid) -> Staff {
        self.staffs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.staff.id == id)
            .map(|s| s.staff.clone())
            .unwrap()
    }

    pub fn recovery_hashes(&self, id: Uuid) -> Vec<String> {
        self.recovery_hashes
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    fn update(&self, id: Uuid, f: impl FnOnce(&mut Staff) -> bool) -> bool {
        let mut staffs = self.staffs.lock().unwrap();
        match staffs.iter_mut().find(|s| s.staff.id == id) {
            Some(s) => f(&mut s.staff),
            None => false,
        }
    }
}

impl StaffRepository for MockStaffRepo {
    async fn find_authenticated(
        &self,
        id: Uuid,
    ) -> Result<Option<AuthenticatedStaff>, ApiServiceError> {
        Ok(self
            .staffs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.staff.id == id)
            .cloned())
    }

    async fn set_pending_mfa_secret(
        &self,
        staff_id: Uuid,
        secret: &str,
    ) -> Result<bool, ApiServiceError> {
        Ok(self.update(staff_id, |s| {
            if s.is_mfa_enabled {
                return false;
            }
            s.mfa_secret = Some(secret.to_owned());
            true
        }))
    }

    async fn enable_mfa(
        &self,
        staff_id: Uuid,
        verified_secret: &str,
        recovery_code_hashes: &[String],
    ) -> Result<bool, ApiServiceError> {
        let enabled = self.update(staff_id, |s| {
            if s.is_mfa_enabled || s.mfa_secret.as_deref() != Some(verified_secret) {
                return false;
            }
            s.is_mfa_enabled = true;
            true
        });
        if enabled {
            self.recovery_hashes
                .lock()
                .unwrap()
                .insert(staff_id, recovery_code_hashes.to_vec());
        }
        Ok(enabled)
    }

    async fn disable_mfa(&self, staff_id: Uuid) -> Result<(), ApiServiceError> {
        self.update(staff_id, |s| {
            s.is_mfa_enabled = false;
            s.mfa_secret = None;
            true
        });
        self.recovery_hashes.lock().unwrap().remove(&staff_id);
        Ok(())
    }
}

// ── MockOfficeRepo ───────────────────────────────────────────────────────────

pub struct MockOfficeRepo {
    pub statuses: HashMap<Uuid, BillingStatus>,
}

impl MockOfficeRepo {
    pub fn new(statuses: &[(Uuid, BillingStatus)]) -> Self {
        Self {
            statuses: statuses.iter().copied().collect(),
        }
    }
}

impl OfficeRepository for MockOfficeRepo {
    async fn find_billing_status(
        &self,
        office_id: Uuid,
    ) -> Result<Option<BillingStatus>, ApiServiceError> {
        Ok(self.statuses.get(&office_id).copied())
    }
}

// ── MockWelfareRecipientRepo ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StoredRecipient {
    pub id: Uuid,
    pub office_id: Uuid,
    pub registration: RecipientRegistration,
}

#[derive(Debug, Clone)]
pub struct StoredDetail {
    pub recipient_id: Uuid,
    pub category: String,
}

/// Stages every row of a registration and commits them together, so a failing
/// detail insert leaves nothing behind.
pub struct MockWelfareRecipientRepo {
    pub recipients: Arc<Mutex<Vec<StoredRecipient>>>,
    pub details: Arc<Mutex<Vec<StoredDetail>>>,
    /// Categories the simulated database enum accepts.
    pub known_categories: Vec<String>,
    /// Fail with an internal error when inserting the detail at this index.
    pub fail_on_detail: Option<usize>,
}

impl MockWelfareRecipientRepo {
    pub fn new() -> Self {
        Self {
            recipients: Arc::new(Mutex::new(vec![])),
            details: Arc::new(Mutex::new(vec![])),
            known_categories: [
                "physical_handbook",
                "intellectual_handbook",
                "mental_health_handbook",
                "disability_basic_pension",
                "other_disability_pension",
                "public_assistance",
            ]
            .map(str::to_owned)
            .to_vec(),
            fail_on_detail: None,
        }
    }

    pub fn failing_on_detail(index: usize) -> Self {
        Self {
            fail_on_detail: Some(index),
            ..Self::new()
        }
    }

    pub fn recipient_count(&self) -> usize {
        self.recipients.lock().unwrap().len()
    }

    pub fn detail_count(&self) -> usize {
        self.details.lock().unwrap().len()
    }
}

impl WelfareRecipientRepository for MockWelfareRecipientRepo {
    async fn create_with_details(
        &self,
        office_id: Uuid,
        registration: &RecipientRegistration,
    ) -> Result<Uuid, ApiServiceError> {
        let id = Uuid::now_v7();
        let mut staged = Vec::new();
        for (i, detail) in registration.disability_details.iter().enumerate() {
            if self.fail_on_detail == Some(i) {
                return Err(ApiServiceError::Internal(anyhow::anyhow!(
                    "simulated failure inserting detail {i}"
                )));
            }
            if !self.known_categories.contains(&detail.category) {
                return Err(ApiServiceError::DisabilityCategoryInvalid);
            }
            staged.push(StoredDetail {
                recipient_id: id,
                category: detail.category.clone(),
            });
        }

        self.recipients.lock().unwrap().push(StoredRecipient {
            id,
            office_id,
            registration: registration.clone(),
        });
        self.details.lock().unwrap().extend(staged);
        Ok(id)
    }
}

// ── MockEmployeeRequestRepo ──────────────────────────────────────────────────

pub struct MockEmployeeRequestRepo {
    pub requests: Arc<Mutex<Vec<EmployeeRequest>>>,
}

impl MockEmployeeRequestRepo {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn requests(&self) -> Vec<EmployeeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl EmployeeRequestRepository for MockEmployeeRequestRepo {
    async fn create(&self, request: &EmployeeRequest) -> Result<(), ApiServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}
