use uuid::Uuid;

use keikakun_api::error::ApiServiceError;
use keikakun_api::usecase::auth::{RequireActiveBillingUseCase, ResolveStaffUseCase};
use keikakun_auth_types::credentials::access_token_from_headers;
use keikakun_domain::billing::BillingStatus;
use keikakun_domain::staff::StaffRole;
use keikakun_testing::auth::{MockAuth, TEST_JWT_SECRET};

use crate::helpers::{MockOfficeRepo, MockStaffRepo, authenticated, test_staff};

fn resolve_usecase(repo: MockStaffRepo) -> ResolveStaffUseCase<MockStaffRepo> {
    ResolveStaffUseCase {
        staffs: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

// ── ResolveStaffUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_staff_from_bearer_token_with_associations() {
    let staff = test_staff(StaffRole::Manager);
    let offices = [Uuid::new_v4(), Uuid::new_v4()];
    let usecase = resolve_usecase(MockStaffRepo::new(vec![authenticated(
        staff.clone(),
        &offices,
    )]));
    let token = access_token_from_headers(&MockAuth::new(staff.id).bearer_headers());

    let resolved = usecase.execute(token.as_deref()).await.unwrap();

    assert_eq!(resolved.staff.id, staff.id);
    assert_eq!(resolved.primary_office_id(), Some(offices[0]));
    assert_eq!(resolved.office_associations.len(), 2);
}

#[tokio::test]
async fn should_resolve_staff_from_cookie() {
    let staff = test_staff(StaffRole::Owner);
    let usecase = resolve_usecase(MockStaffRepo::with_staff(staff.clone()));
    let token = access_token_from_headers(&MockAuth::new(staff.id).cookie_headers());

    let resolved = usecase.execute(token.as_deref()).await.unwrap();
    assert_eq!(resolved.staff.id, staff.id);
}

#[tokio::test]
async fn should_reject_missing_token() {
    let usecase = resolve_usecase(MockStaffRepo::new(vec![]));
    let result = usecase.execute(None).await;
    assert!(matches!(result, Err(ApiServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_reject_expired_token() {
    let staff = test_staff(StaffRole::Owner);
    let usecase = resolve_usecase(MockStaffRepo::with_staff(staff.clone()));
    let token = MockAuth::new(staff.id).expired_token();

    let result = usecase.execute(Some(&token)).await;
    assert!(matches!(result, Err(ApiServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let staff = test_staff(StaffRole::Owner);
    let usecase = resolve_usecase(MockStaffRepo::with_staff(staff.clone()));
    let mut auth = MockAuth::new(staff.id);
    auth.secret = "some-other-secret".to_owned();

    let result = usecase.execute(Some(&auth.access_token())).await;
    assert!(matches!(result, Err(ApiServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_reject_token_of_unknown_staff() {
    let usecase = resolve_usecase(MockStaffRepo::new(vec![]));
    let token = MockAuth::new(Uuid::new_v4()).access_token();

    let result = usecase.execute(Some(&token)).await;
    assert!(
        matches!(result, Err(ApiServiceError::Unauthorized)),
        "expected Unauthorized, got {result:?}"
    );
}

// ── RequireActiveBillingUseCase ──────────────────────────────────────────────

#[tokio::test]
async fn should_allow_active_and_free_billing() {
    for status in [
        BillingStatus::Free,
        BillingStatus::EarlyPayment,
        BillingStatus::Active,
    ] {
        let office = Uuid::new_v4();
        let usecase = RequireActiveBillingUseCase {
            offices: MockOfficeRepo::new(&[(office, status)]),
        };
        let staff = authenticated(test_staff(StaffRole::Owner), &[office]);
        assert!(usecase.execute(&staff).await.is_ok(), "{status:?} rejected");
    }
}

#[tokio::test]
async fn should_reject_lapsed_billing() {
    for status in [BillingStatus::PastDue, BillingStatus::Canceled] {
        let office = Uuid::new_v4();
        let usecase = RequireActiveBillingUseCase {
            offices: MockOfficeRepo::new(&[(office, status)]),
        };
        let staff = authenticated(test_staff(StaffRole::Owner), &[office]);
        let result = usecase.execute(&staff).await;
        assert!(
            matches!(result, Err(ApiServiceError::BillingInactive)),
            "expected BillingInactive for {status:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_check_billing_of_primary_office_only() {
    let primary = Uuid::new_v4();
    let secondary = Uuid::new_v4();
    let usecase = RequireActiveBillingUseCase {
        offices: MockOfficeRepo::new(&[
            (primary, BillingStatus::Active),
            (secondary, BillingStatus::Canceled),
        ]),
    };
    let staff = authenticated(test_staff(StaffRole::Manager), &[primary, secondary]);
    assert!(usecase.execute(&staff).await.is_ok());
}

#[tokio::test]
async fn should_pass_staff_without_office() {
    let usecase = RequireActiveBillingUseCase {
        offices: MockOfficeRepo::new(&[]),
    };
    let staff = authenticated(test_staff(StaffRole::Employee), &[]);
    assert!(usecase.execute(&staff).await.is_ok());
}

#[tokio::test]
async fn should_fail_internally_when_office_row_is_missing() {
    let usecase = RequireActiveBillingUseCase {
        offices: MockOfficeRepo::new(&[]),
    };
    let staff = authenticated(test_staff(StaffRole::Owner), &[Uuid::new_v4()]);
    let result = usecase.execute(&staff).await;
    assert!(matches!(result, Err(ApiServiceError::Internal(_))));
}
