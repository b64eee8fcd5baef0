use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

/// Values of the `disability_category` Postgres enum.
pub const DISABILITY_CATEGORIES: [&str; 6] = [
    "physical_handbook",
    "intellectual_handbook",
    "mental_health_handbook",
    "disability_basic_pension",
    "other_disability_pension",
    "public_assistance",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(DisabilityCategory::Enum)
                    .values(DISABILITY_CATEGORIES.iter().map(|v| Alias::new(*v)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DisabilityDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DisabilityDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DisabilityDetails::WelfareRecipientId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DisabilityDetails::Category)
                            .custom(DisabilityCategory::Enum)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DisabilityDetails::GradeOrLevel).string())
                    .col(ColumnDef::new(DisabilityDetails::ApplicationStatus).string())
                    .col(
                        ColumnDef::new(DisabilityDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DisabilityDetails::Table, DisabilityDetails::WelfareRecipientId)
                            .to(WelfareRecipients::Table, WelfareRecipients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(DisabilityDetails::Table)
                    .col(DisabilityDetails::WelfareRecipientId)
                    .name("idx_disability_details_welfare_recipient_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DisabilityDetails::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(DisabilityCategory::Enum).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DisabilityCategory {
    #[iden = "disability_category"]
    Enum,
}

#[derive(Iden)]
enum DisabilityDetails {
    Table,
    Id,
    WelfareRecipientId,
    Category,
    GradeOrLevel,
    ApplicationStatus,
    CreatedAt,
}

#[derive(Iden)]
enum WelfareRecipients {
    Table,
    Id,
}
