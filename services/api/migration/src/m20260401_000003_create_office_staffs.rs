use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfficeStaffs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OfficeStaffs::StaffId).uuid().not_null())
                    .col(ColumnDef::new(OfficeStaffs::OfficeId).uuid().not_null())
                    .col(
                        ColumnDef::new(OfficeStaffs::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OfficeStaffs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(OfficeStaffs::StaffId)
                            .col(OfficeStaffs::OfficeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OfficeStaffs::Table, OfficeStaffs::StaffId)
                            .to(Staffs::Table, Staffs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OfficeStaffs::Table, OfficeStaffs::OfficeId)
                            .to(Offices::Table, Offices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(OfficeStaffs::Table)
                    .col(OfficeStaffs::OfficeId)
                    .name("idx_office_staffs_office_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OfficeStaffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OfficeStaffs {
    Table,
    StaffId,
    OfficeId,
    IsPrimary,
    CreatedAt,
}

#[derive(Iden)]
enum Staffs {
    Table,
    Id,
}

#[derive(Iden)]
enum Offices {
    Table,
    Id,
}
