use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WelfareRecipients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WelfareRecipients::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WelfareRecipients::LastName).string().not_null())
                    .col(ColumnDef::new(WelfareRecipients::FirstName).string().not_null())
                    .col(
                        ColumnDef::new(WelfareRecipients::LastNameFurigana)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WelfareRecipients::FirstNameFurigana)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WelfareRecipients::BirthDay).date().not_null())
                    .col(ColumnDef::new(WelfareRecipients::Gender).string().not_null())
                    .col(ColumnDef::new(WelfareRecipients::Address).string())
                    .col(ColumnDef::new(WelfareRecipients::FormOfResidence).string())
                    .col(ColumnDef::new(WelfareRecipients::Tel).string())
                    .col(ColumnDef::new(WelfareRecipients::DisabilityOrDiseaseName).string())
                    .col(
                        ColumnDef::new(WelfareRecipients::LivelihoodProtection)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WelfareRecipients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WelfareRecipients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OfficeWelfareRecipients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OfficeWelfareRecipients::WelfareRecipientId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfficeWelfareRecipients::OfficeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfficeWelfareRecipients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(OfficeWelfareRecipients::WelfareRecipientId)
                            .col(OfficeWelfareRecipients::OfficeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                OfficeWelfareRecipients::Table,
                                OfficeWelfareRecipients::WelfareRecipientId,
                            )
                            .to(WelfareRecipients::Table, WelfareRecipients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                OfficeWelfareRecipients::Table,
                                OfficeWelfareRecipients::OfficeId,
                            )
                            .to(Offices::Table, Offices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(OfficeWelfareRecipients::Table)
                    .col(OfficeWelfareRecipients::OfficeId)
                    .name("idx_office_welfare_recipients_office_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmergencyContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmergencyContacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmergencyContacts::WelfareRecipientId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmergencyContacts::LastName).string().not_null())
                    .col(ColumnDef::new(EmergencyContacts::FirstName).string().not_null())
                    .col(
                        ColumnDef::new(EmergencyContacts::Relationship)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmergencyContacts::Tel).string().not_null())
                    .col(
                        ColumnDef::new(EmergencyContacts::Priority)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmergencyContacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmergencyContacts::Table, EmergencyContacts::WelfareRecipientId)
                            .to(WelfareRecipients::Table, WelfareRecipients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmergencyContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OfficeWelfareRecipients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WelfareRecipients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WelfareRecipients {
    Table,
    Id,
    LastName,
    FirstName,
    LastNameFurigana,
    FirstNameFurigana,
    BirthDay,
    Gender,
    Address,
    FormOfResidence,
    Tel,
    DisabilityOrDiseaseName,
    LivelihoodProtection,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum OfficeWelfareRecipients {
    Table,
    WelfareRecipientId,
    OfficeId,
    CreatedAt,
}

#[derive(Iden)]
enum EmergencyContacts {
    Table,
    Id,
    WelfareRecipientId,
    LastName,
    FirstName,
    Relationship,
    Tel,
    Priority,
    CreatedAt,
}

#[derive(Iden)]
enum Offices {
    Table,
    Id,
}
