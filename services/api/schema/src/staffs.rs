use sea_orm::entity::prelude::*;

/// Staff account. MFA state lives on the row: `mfa_secret` holds the pending
/// or active base32 secret, `is_mfa_enabled` flips after first verification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staffs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub hashed_password: String,
    /// `owner | manager | employee`.
    pub role: String,
    pub is_mfa_enabled: bool,
    pub mfa_secret: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::office_staffs::Entity")]
    OfficeStaffs,
    #[sea_orm(has_many = "super::mfa_recovery_codes::Entity")]
    MfaRecoveryCodes,
}

impl Related<super::office_staffs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficeStaffs.def()
    }
}

impl Related<super::mfa_recovery_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MfaRecoveryCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
