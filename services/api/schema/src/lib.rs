//! SeaORM entities for the Keikakun API database.

pub mod disability_details;
pub mod emergency_contacts;
pub mod employee_action_requests;
pub mod mfa_recovery_codes;
pub mod office_staffs;
pub mod office_welfare_recipients;
pub mod offices;
pub mod staffs;
pub mod welfare_recipients;
