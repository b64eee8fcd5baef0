use sea_orm::entity::prelude::*;

/// One disability certificate or pension record of a recipient.
///
/// `category` is stored in the Postgres enum `disability_category`. It is read
/// back as text and written with an explicit cast, so an unknown value is
/// rejected by the database with `invalid_text_representation` (22P02).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "disability_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub welfare_recipient_id: Uuid,
    #[sea_orm(select_as = "text", save_as = "disability_category")]
    pub category: String,
    pub grade_or_level: Option<String>,
    pub application_status: Option<String>,
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
