use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbEmployeeRequestRepository, DbOfficeRepository, DbStaffRepository,
    DbWelfareRecipientRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub mfa_issuer: String,
}

impl AppState {
    pub fn staff_repo(&self) -> DbStaffRepository {
        DbStaffRepository {
            db: self.db.clone(),
        }
    }

    pub fn office_repo(&self) -> DbOfficeRepository {
        DbOfficeRepository {
            db: self.db.clone(),
        }
    }

    pub fn welfare_recipient_repo(&self) -> DbWelfareRecipientRepository {
        DbWelfareRecipientRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_request_repo(&self) -> DbEmployeeRequestRepository {
        DbEmployeeRequestRepository {
            db: self.db.clone(),
        }
    }
}
