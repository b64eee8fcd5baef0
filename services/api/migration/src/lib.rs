use sea_orm_migration::prelude::*;

mod m20260401_000001_create_offices;
mod m20260401_000002_create_staffs;
mod m20260401_000003_create_office_staffs;
mod m20260401_000004_create_mfa_recovery_codes;
mod m20260401_000005_create_welfare_recipients;
mod m20260401_000006_create_disability_details;
mod m20260401_000007_create_employee_action_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_offices::Migration),
            Box::new(m20260401_000002_create_staffs::Migration),
            Box::new(m20260401_000003_create_office_staffs::Migration),
            Box::new(m20260401_000004_create_mfa_recovery_codes::Migration),
            Box::new(m20260401_000005_create_welfare_recipients::Migration),
            Box::new(m20260401_000006_create_disability_details::Migration),
            Box::new(m20260401_000007_create_employee_action_requests::Migration),
        ]
    }
}
