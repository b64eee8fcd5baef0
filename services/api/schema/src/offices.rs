use sea_orm::entity::prelude::*;

/// Welfare service office. Staff and recipients belong to offices.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// `free | early_payment | active | past_due | canceled`.
    pub billing_status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::office_staffs::Entity")]
    OfficeStaffs,
    #[sea_orm(has_many = "super::office_welfare_recipients::Entity")]
    OfficeWelfareRecipients,
}

impl Related<super::office_staffs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficeStaffs.def()
    }
}

impl Related<super::office_welfare_recipients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficeWelfareRecipients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
