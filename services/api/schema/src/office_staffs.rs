use sea_orm::entity::prelude::*;

/// Staff ↔ office membership.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "office_staffs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub staff_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub office_id: Uuid,
    pub is_primary: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staffs::Entity",
        from = "Column::StaffId",
        to = "super::staffs::Column::Id"
    )]
    Staff,
    #[sea_orm(
        belongs_to = "super::offices::Entity",
        from = "Column::OfficeId",
        to = "super::offices::Column::Id"
    )]
    Office,
}

impl Related<super::staffs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::offices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
