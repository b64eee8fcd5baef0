use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeActionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeActionRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::RequesterStaffId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::OfficeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::ResourceType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::ActionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmployeeActionRequests::ResourceId).uuid())
                    .col(
                        ColumnDef::new(EmployeeActionRequests::RequestData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EmployeeActionRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EmployeeActionRequests::Table,
                                EmployeeActionRequests::RequesterStaffId,
                            )
                            .to(Staffs::Table, Staffs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeeActionRequests::Table, EmployeeActionRequests::OfficeId)
                            .to(Offices::Table, Offices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(EmployeeActionRequests::Table)
                    .col(EmployeeActionRequests::OfficeId)
                    .col(EmployeeActionRequests::Status)
                    .name("idx_employee_action_requests_office_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeActionRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmployeeActionRequests {
    Table,
    Id,
    RequesterStaffId,
    OfficeId,
    ResourceType,
    ActionType,
    ResourceId,
    RequestData,
    Status,
    CreatedAt,
    UpdatedAt,
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
