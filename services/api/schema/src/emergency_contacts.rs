use sea_orm::entity::prelude::*;

/// Person to call about a recipient. Lower `priority` is called first.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "emergency_contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub welfare_recipient_id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub relationship: String,
    pub tel: String,
    pub priority: i32,
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
}

impl Related<super::welfare_recipients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WelfareRecipient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
