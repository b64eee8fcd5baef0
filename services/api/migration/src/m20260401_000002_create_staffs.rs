use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staffs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staffs::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Staffs::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Staffs::LastName).string().not_null())
                    .col(ColumnDef::new(Staffs::FirstName).string().not_null())
                    .col(ColumnDef::new(Staffs::HashedPassword).string().not_null())
                    .col(ColumnDef::new(Staffs::Role).string().not_null())
                    .col(
                        ColumnDef::new(Staffs::IsMfaEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Staffs::MfaSecret).string())
                    .col(
                        ColumnDef::new(Staffs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Staffs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staffs {
    Table,
    Id,
    Email,
    LastName,
    FirstName,
    HashedPassword,
    Role,
    IsMfaEnabled,
    MfaSecret,
    CreatedAt,
    UpdatedAt,
}
