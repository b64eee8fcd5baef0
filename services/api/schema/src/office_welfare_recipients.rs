use sea_orm::entity::prelude::*;

/// Office ownership of a welfare recipient.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "office_welfare_recipients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub welfare_recipient_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub office_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::welfare_recipients::Entity",
        from = "Column::WelfareRecipientId",
        to = "super::welfare_recipients::Column::Id"
    )]
    WelfareRecipient,
    #[sea_orm(
        belongs_to = "super::offices::Entity",
        from = "Column::OfficeId",
        to = "super::offices::Column::Id"
    )]
    Office,
}

impl Related<super::welfare_recipients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WelfareRecipient.def()
    }
}

impl Related<super::offices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
