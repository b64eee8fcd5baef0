use sea_orm::entity::prelude::*;

/// Person receiving welfare services from an office.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "welfare_recipients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub last_name_furigana: String,
    pub first_name_furigana: String,
    pub birth_day: chrono::NaiveDate,
    pub gender: String,
    pub address: Option<String>,
    pub form_of_residence: Option<String>,
    pub tel: Option<String>,
    pub disability_or_disease_name: Option<String>,
    pub livelihood_protection: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::office_welfare_recipients::Entity")]
    OfficeWelfareRecipients,
    #[sea_orm(has_many = "super::disability_details::Entity")]
    DisabilityDetails,
    #[sea_orm(has_many = "super::emergency_contacts::Entity")]
    EmergencyContacts,
}

impl Related<super::office_welfare_recipients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficeWelfareRecipients.def()
    }
}

impl Related<super::disability_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisabilityDetails.def()
    }
}

impl Related<super::emergency_contacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmergencyContacts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
