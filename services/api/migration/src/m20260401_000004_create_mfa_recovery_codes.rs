use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MfaRecoveryCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MfaRecoveryCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MfaRecoveryCodes::StaffId).uuid().not_null())
                    .col(
                        ColumnDef::new(MfaRecoveryCodes::CodeHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MfaRecoveryCodes::UsedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(MfaRecoveryCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MfaRecoveryCodes::Table, MfaRecoveryCodes::StaffId)
                            .to(Staffs::Table, Staffs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MfaRecoveryCodes::Table)
                    .col(MfaRecoveryCodes::StaffId)
                    .name("idx_mfa_recovery_codes_staff_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MfaRecoveryCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MfaRecoveryCodes {
    Table,
    Id,
    StaffId,
    CodeHash,
    UsedAt,
    CreatedAt,
}

#[derive(Iden)]
enum Staffs {
    Table,
    Id,
}
