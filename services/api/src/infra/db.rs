use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::sqlx;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QueryOrder, RuntimeErr, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use keikakun_api_schema::{
    disability_details, emergency_contacts, employee_action_requests, mfa_recovery_codes,
    office_staffs, office_welfare_recipients, offices, staffs, welfare_recipients,
};
use keikakun_domain::billing::BillingStatus;
use keikakun_domain::staff::StaffRole;

use crate::domain::repository::{
    EmployeeRequestRepository, OfficeRepository, StaffRepository, WelfareRecipientRepository,
};
use crate::domain::types::{
    AuthenticatedStaff, EmployeeRequest, OfficeAssociation, RecipientRegistration, Staff,
};
use crate::error::ApiServiceError;

/// Postgres SQLSTATE `invalid_text_representation`.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

// ── Staff repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStaffRepository {
    pub db: DatabaseConnection,
}

impl StaffRepository for DbStaffRepository {
    async fn find_authenticated(
        &self,
        id: Uuid,
    ) -> Result<Option<AuthenticatedStaff>, ApiServiceError> {
        let Some(model) = staffs::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find staff by id")?
        else {
            return Ok(None);
        };

        let associations = office_staffs::Entity::find()
            .filter(office_staffs::Column::StaffId.eq(id))
            .order_by_desc(office_staffs::Column::IsPrimary)
            .order_by_asc(office_staffs::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("load office associations")?;

        Ok(Some(AuthenticatedStaff {
            staff: staff_from_model(model)?,
            office_associations: associations
                .into_iter()
                .map(|m| OfficeAssociation {
                    office_id: m.office_id,
                    is_primary: m.is_primary,
                })
                .collect(),
        }))
    }

    async fn set_pending_mfa_secret(
        &self,
        staff_id: Uuid,
        secret: &str,
    ) -> Result<bool, ApiServiceError> {
        let result = staffs::Entity::update_many()
            .col_expr(staffs::Column::MfaSecret, Expr::value(secret))
            .col_expr(staffs::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(staffs::Column::Id.eq(staff_id))
            .filter(staffs::Column::IsMfaEnabled.eq(false))
            .exec(&self.db)
            .await
            .context("store pending mfa secret")?;
        Ok(result.rows_affected > 0)
    }

    async fn enable_mfa(
        &self,
        staff_id: Uuid,
        verified_secret: &str,
        recovery_code_hashes: &[String],
    ) -> Result<bool, ApiServiceError> {
        let secret = verified_secret.to_owned();
        let hashes = recovery_code_hashes.to_vec();
        let enabled = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let result = staffs::Entity::update_many()
                        .col_expr(staffs::Column::IsMfaEnabled, Expr::value(true))
                        .col_expr(staffs::Column::UpdatedAt, Expr::value(now))
                        .filter(staffs::Column::Id.eq(staff_id))
                        .filter(staffs::Column::IsMfaEnabled.eq(false))
                        .filter(staffs::Column::MfaSecret.eq(secret))
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }
                    replace_recovery_codes(txn, staff_id, &hashes, now).await?;
                    Ok(true)
                })
            })
            .await
            .context("enable mfa")?;
        Ok(enabled)
    }

    async fn disable_mfa(&self, staff_id: Uuid) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    staffs::Entity::update_many()
                        .col_expr(staffs::Column::IsMfaEnabled, Expr::value(false))
                        .col_expr(staffs::Column::MfaSecret, Expr::value(Option::<String>::None))
                        .col_expr(staffs::Column::UpdatedAt, Expr::value(now))
                        .filter(staffs::Column::Id.eq(staff_id))
                        .exec(txn)
                        .await?;
                    replace_recovery_codes(txn, staff_id, &[], now).await
                })
            })
            .await
            .context("disable mfa")?;
        Ok(())
    }
}

async fn replace_recovery_codes(
    txn: &DatabaseTransaction,
    staff_id: Uuid,
    hashes: &[String],
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    mfa_recovery_codes::Entity::delete_many()
        .filter(mfa_recovery_codes::Column::StaffId.eq(staff_id))
        .exec(txn)
        .await?;
    if hashes.is_empty() {
        return Ok(());
    }
    let models = hashes.iter().map(|hash| mfa_recovery_codes::ActiveModel {
        id: Set(Uuid::now_v7()),
        staff_id: Set(staff_id),
        code_hash: Set(hash.clone()),
        used_at: Set(None),
        created_at: Set(now),
    });
    mfa_recovery_codes::Entity::insert_many(models)
        .exec(txn)
        .await?;
    Ok(())
}

fn staff_from_model(m: staffs::Model) -> Result<Staff, ApiServiceError> {
    let role = m
        .role
        .parse::<StaffRole>()
        .with_context(|| format!("staff {} has unreadable role", m.id))?;
    Ok(Staff {
        id: m.id,
        email: m.email,
        last_name: m.last_name,
        first_name: m.first_name,
        hashed_password: m.hashed_password,
        role,
        is_mfa_enabled: m.is_mfa_enabled,
        mfa_secret: m.mfa_secret,
    })
}

// ── Office repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOfficeRepository {
    pub db: DatabaseConnection,
}

impl OfficeRepository for DbOfficeRepository {
    async fn find_billing_status(
        &self,
        office_id: Uuid,
    ) -> Result<Option<BillingStatus>, ApiServiceError> {
        let Some(model) = offices::Entity::find_by_id(office_id)
            .one(&self.db)
            .await
            .context("find office by id")?
        else {
            return Ok(None);
        };
        let status = model
            .billing_status
            .parse::<BillingStatus>()
            .with_context(|| format!("office {office_id} has unreadable billing status"))?;
        Ok(Some(status))
    }
}

// ── Welfare recipient repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWelfareRecipientRepository {
    pub db: DatabaseConnection,
}

impl WelfareRecipientRepository for DbWelfareRecipientRepository {
    async fn create_with_details(
        &self,
        office_id: Uuid,
        registration: &RecipientRegistration,
    ) -> Result<Uuid, ApiServiceError> {
        let registration = registration.clone();
        self.db
            .transaction::<_, Uuid, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let recipient_id = Uuid::now_v7();
                    insert_recipient(txn, recipient_id, &registration, now).await?;
                    office_welfare_recipients::ActiveModel {
                        welfare_recipient_id: Set(recipient_id),
                        office_id: Set(office_id),
                        created_at: Set(now),
                    }
                    .insert(txn)
                    .await?;
                    insert_emergency_contacts(txn, recipient_id, &registration, now).await?;
                    insert_disability_details(txn, recipient_id, &registration, now).await?;
                    Ok(recipient_id)
                })
            })
            .await
            .map_err(classify_write_error)
    }
}

async fn insert_recipient(
    txn: &DatabaseTransaction,
    id: Uuid,
    registration: &RecipientRegistration,
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    let basic = &registration.basic_info;
    let contact = &registration.contact_address;
    welfare_recipients::ActiveModel {
        id: Set(id),
        last_name: Set(basic.last_name.trim().to_owned()),
        first_name: Set(basic.first_name.trim().to_owned()),
        last_name_furigana: Set(basic.last_name_furigana.clone()),
        first_name_furigana: Set(basic.first_name_furigana.clone()),
        birth_day: Set(basic.birth_day),
        gender: Set(basic.gender.as_str().to_owned()),
        address: Set(contact.address.clone()),
        form_of_residence: Set(contact.form_of_residence.clone()),
        tel: Set(contact.tel.clone()),
        disability_or_disease_name: Set(registration
            .disability_info
            .disability_or_disease_name
            .clone()),
        livelihood_protection: Set(registration.disability_info.livelihood_protection),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_emergency_contacts(
    txn: &DatabaseTransaction,
    recipient_id: Uuid,
    registration: &RecipientRegistration,
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    if registration.emergency_contacts.is_empty() {
        return Ok(());
    }
    let models = registration
        .emergency_contacts
        .iter()
        .map(|c| emergency_contacts::ActiveModel {
            id: Set(Uuid::now_v7()),
            welfare_recipient_id: Set(recipient_id),
            last_name: Set(c.last_name.clone()),
            first_name: Set(c.first_name.clone()),
            relationship: Set(c.relationship.clone()),
            tel: Set(c.tel.clone()),
            priority: Set(c.priority),
            created_at: Set(now),
        });
    emergency_contacts::Entity::insert_many(models)
        .exec(txn)
        .await?;
    Ok(())
}

async fn insert_disability_details(
    txn: &DatabaseTransaction,
    recipient_id: Uuid,
    registration: &RecipientRegistration,
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    if registration.disability_details.is_empty() {
        return Ok(());
    }
    let models = registration
        .disability_details
        .iter()
        .map(|d| disability_details::ActiveModel {
            id: Set(Uuid::now_v7()),
            welfare_recipient_id: Set(recipient_id),
            category: Set(d.category.trim().to_owned()),
            grade_or_level: Set(d.grade_or_level.clone()),
            application_status: Set(d.application_status.clone()),
            created_at: Set(now),
        });
    disability_details::Entity::insert_many(models)
        .exec(txn)
        .await?;
    Ok(())
}

/// Map a failed recipient transaction to the error reported to the client.
/// The transaction has already been rolled back at this point.
fn classify_write_error(err: TransactionError<DbErr>) -> ApiServiceError {
    let err = match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    };
    match invalid_text_representation(&err) {
        Some(message) => classify_invalid_text(message),
        None => ApiServiceError::Internal(
            anyhow::Error::new(err).context("create welfare recipient with details"),
        ),
    }
}

/// Database message of a 22P02 error, if `err` is one.
fn invalid_text_representation(err: &DbErr) -> Option<&str> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db)))) = err
    else {
        return None;
    };
    (db.code().as_deref() == Some(INVALID_TEXT_REPRESENTATION)).then(|| db.message())
}

fn classify_invalid_text(message: &str) -> ApiServiceError {
    tracing::warn!(db_message = message, "rejected value with invalid text representation");
    if message.contains("disability_category") {
        ApiServiceError::DisabilityCategoryInvalid
    } else {
        ApiServiceError::InvalidInput
    }
}

// ── Employee request repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRequestRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRequestRepository for DbEmployeeRequestRepository {
    async fn create(&self, request: &EmployeeRequest) -> Result<(), ApiServiceError> {
        employee_action_requests::ActiveModel {
            id: Set(request.id),
            requester_staff_id: Set(request.requester_staff_id),
            office_id: Set(request.office_id),
            resource_type: Set(request.resource_type.as_str().to_owned()),
            action_type: Set(request.action_type.as_str().to_owned()),
            resource_id: Set(request.resource_id),
            request_data: Set(request.request_data.clone()),
            status: Set(request.status.as_str().to_owned()),
            created_at: Set(request.created_at),
            updated_at: Set(request.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert employee action request")?;
        Ok(())
    }
}
