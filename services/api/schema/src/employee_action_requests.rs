use sea_orm::entity::prelude::*;

/// Write requested by an employee, waiting for owner/manager approval.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_action_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub requester_staff_id: Uuid,
    pub office_id: Uuid,
    pub resource_type: String,
    pub action_type: String,
    pub resource_id: Option<Uuid>,
    pub request_data: Json,
    /// `pending | approved | rejected`.
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
