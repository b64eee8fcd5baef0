use keikakun_api::error::ApiServiceError;
use keikakun_api::usecase::mfa::{DisableMfaUseCase, EnrollMfaUseCase, VerifyMfaUseCase};
use keikakun_auth_types::recovery::{RECOVERY_CODE_COUNT, hash_recovery_code};
use keikakun_auth_types::totp::current_totp_code;
use keikakun_domain::staff::StaffRole;

use crate::helpers::{MockStaffRepo, TEST_ISSUER, TEST_PASSWORD, test_staff};

fn enroll_usecase(repo: MockStaffRepo) -> EnrollMfaUseCase<MockStaffRepo> {
    EnrollMfaUseCase {
        staffs: repo,
        issuer: TEST_ISSUER.to_owned(),
    }
}

// ── EnrollMfaUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_pending_secret_and_return_provisioning_uri() {
    let staff = test_staff(StaffRole::Owner);
    let usecase = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));

    let enrollment = usecase.execute(&staff).await.unwrap();

    assert!(!enrollment.secret_key.is_empty());
    assert!(enrollment.qr_code_uri.starts_with("otpauth://totp/"));
    assert!(enrollment.qr_code_uri.contains("issuer=Keikakun"));
    assert!(enrollment.qr_code_uri.contains(&enrollment.secret_key));

    let stored = usecase.staffs.staff(staff.id);
    assert_eq!(stored.mfa_secret.as_deref(), Some(enrollment.secret_key.as_str()));
    assert!(!stored.is_mfa_enabled);
}

#[tokio::test]
async fn should_reject_enrollment_when_already_enabled_without_touching_secret() {
    let mut staff = test_staff(StaffRole::Manager);
    staff.is_mfa_enabled = true;
    staff.mfa_secret = Some("JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP".to_owned());
    let usecase = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));

    for _ in 0..2 {
        let result = usecase.execute(&staff).await;
        assert!(
            matches!(result, Err(ApiServiceError::MfaAlreadyEnabled)),
            "expected MfaAlreadyEnabled, got {result:?}"
        );
    }
    assert_eq!(usecase.staffs.staff(staff.id).mfa_secret, staff.mfa_secret);
}

#[tokio::test]
async fn should_enroll_staff_whose_email_contains_colon() {
    let mut staff = test_staff(StaffRole::Manager);
    staff.email = "\"sato:ichiro\"@example.com".to_owned();
    let usecase = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));

    let enrollment = usecase.execute(&staff).await.unwrap();

    assert!(enrollment.qr_code_uri.starts_with("otpauth://totp/Keikakun:"));
    assert_eq!(
        usecase.staffs.staff(staff.id).mfa_secret.as_deref(),
        Some(enrollment.secret_key.as_str())
    );
}

#[tokio::test]
async fn should_replace_pending_secret_on_re_enrollment() {
    let staff = test_staff(StaffRole::Employee);
    let usecase = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));

    let first = usecase.execute(&staff).await.unwrap();
    let second = usecase.execute(&staff).await.unwrap();

    assert_ne!(first.secret_key, second.secret_key);
    assert_eq!(
        usecase.staffs.staff(staff.id).mfa_secret.as_deref(),
        Some(second.secret_key.as_str())
    );
}

#[tokio::test]
async fn should_reject_enrollment_when_enabled_concurrently() {
    let staff = test_staff(StaffRole::Owner);
    let repo = MockStaffRepo::with_staff(staff.clone());
    // Stored state moved on after the request snapshot was taken.
    repo.staffs.lock().unwrap()[0].staff.is_mfa_enabled = true;
    let usecase = enroll_usecase(repo);

    let result = usecase.execute(&staff).await;
    assert!(matches!(result, Err(ApiServiceError::MfaAlreadyEnabled)));
    assert!(usecase.staffs.staff(staff.id).mfa_secret.is_none());
}

// ── VerifyMfaUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_verification_without_enrollment() {
    let staff = test_staff(StaffRole::Owner);
    let usecase = VerifyMfaUseCase {
        staffs: MockStaffRepo::with_staff(staff.clone()),
    };

    let result = usecase.execute(&staff, "123456").await;
    assert!(
        matches!(result, Err(ApiServiceError::MfaNotEnrolled)),
        "expected MfaNotEnrolled, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code_and_stay_disabled() {
    let staff = test_staff(StaffRole::Owner);
    let enroll = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));
    enroll.execute(&staff).await.unwrap();
    let pending = enroll.staffs.staff(staff.id);
    let secret = pending.mfa_secret.clone().unwrap();
    let wrong = if current_totp_code(&secret).unwrap() == "000000" {
        "111111"
    } else {
        "000000"
    };

    let usecase = VerifyMfaUseCase {
        staffs: enroll.staffs,
    };
    let result = usecase.execute(&pending, wrong).await;

    assert!(
        matches!(result, Err(ApiServiceError::InvalidTotpCode)),
        "expected InvalidTotpCode, got {result:?}"
    );
    assert!(!usecase.staffs.staff(staff.id).is_mfa_enabled);
    assert!(usecase.staffs.recovery_hashes(staff.id).is_empty());
}

#[tokio::test]
async fn should_enable_mfa_and_store_hashed_recovery_codes() {
    let staff = test_staff(StaffRole::Owner);
    let enroll = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));
    enroll.execute(&staff).await.unwrap();
    let pending = enroll.staffs.staff(staff.id);
    let code = current_totp_code(pending.mfa_secret.as_deref().unwrap()).unwrap();

    let usecase = VerifyMfaUseCase {
        staffs: enroll.staffs,
    };
    let recovery_codes = usecase.execute(&pending, &code).await.unwrap();

    assert_eq!(recovery_codes.len(), RECOVERY_CODE_COUNT);
    assert!(usecase.staffs.staff(staff.id).is_mfa_enabled);
    let stored = usecase.staffs.recovery_hashes(staff.id);
    let expected: Vec<String> = recovery_codes.iter().map(|c| hash_recovery_code(c)).collect();
    assert_eq!(stored, expected);
    assert!(!stored.contains(&recovery_codes[0]));
}

#[tokio::test]
async fn should_reject_verification_when_already_enabled() {
    let mut staff = test_staff(StaffRole::Owner);
    staff.is_mfa_enabled = true;
    staff.mfa_secret = Some("JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP".to_owned());
    let usecase = VerifyMfaUseCase {
        staffs: MockStaffRepo::with_staff(staff.clone()),
    };

    let result = usecase.execute(&staff, "123456").await;
    assert!(matches!(result, Err(ApiServiceError::MfaAlreadyEnabled)));
}

#[tokio::test]
async fn should_accept_only_one_of_two_verifications_from_same_snapshot() {
    let staff = test_staff(StaffRole::Owner);
    let enroll = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));
    enroll.execute(&staff).await.unwrap();
    let pending = enroll.staffs.staff(staff.id);
    let code = current_totp_code(pending.mfa_secret.as_deref().unwrap()).unwrap();
    let usecase = VerifyMfaUseCase {
        staffs: enroll.staffs,
    };

    let first = usecase.execute(&pending, &code).await.unwrap();
    let second = usecase.execute(&pending, &code).await;

    assert!(
        matches!(second, Err(ApiServiceError::MfaAlreadyEnabled)),
        "expected MfaAlreadyEnabled, got {second:?}"
    );
    let expected: Vec<String> = first.iter().map(|c| hash_recovery_code(c)).collect();
    assert_eq!(usecase.staffs.recovery_hashes(staff.id), expected);
}

#[tokio::test]
async fn should_not_enable_mfa_when_secret_was_replaced_during_verification() {
    let staff = test_staff(StaffRole::Owner);
    let enroll = enroll_usecase(MockStaffRepo::with_staff(staff.clone()));
    enroll.execute(&staff).await.unwrap();
    let pending = enroll.staffs.staff(staff.id);
    let code = current_totp_code(pending.mfa_secret.as_deref().unwrap()).unwrap();
    // A second enrollment lands after `pending` was loaded.
    let replaced = enroll.execute(&staff).await.unwrap();

    let usecase = VerifyMfaUseCase {
        staffs: enroll.staffs,
    };
    let result = usecase.execute(&pending, &code).await;

    assert!(
        matches!(result, Err(ApiServiceError::MfaAlreadyEnabled)),
        "expected MfaAlreadyEnabled, got {result:?}"
    );
    let stored = usecase.staffs.staff(staff.id);
    assert!(!stored.is_mfa_enabled);
    assert_eq!(stored.mfa_secret.as_deref(), Some(replaced.secret_key.as_str()));
    assert!(usecase.staffs.recovery_hashes(staff.id).is_empty());
}

// ── DisableMfaUseCase ────────────────────────────────────────────────────────

fn enabled_staff() -> keikakun_api::domain::types::Staff {
    let mut staff = test_staff(StaffRole::Manager);
    staff.is_mfa_enabled = true;
    staff.mfa_secret = Some("JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP".to_owned());
    staff
}

#[tokio::test]
async fn should_reject_disable_when_not_enabled() {
    let staff = test_staff(StaffRole::Manager);
    let usecase = DisableMfaUseCase {
        staffs: MockStaffRepo::with_staff(staff.clone()),
    };

    let result = usecase.execute(&staff, TEST_PASSWORD).await;
    assert!(matches!(result, Err(ApiServiceError::MfaNotEnabled)));
}

#[tokio::test]
async fn should_reject_disable_with_wrong_password() {
    let staff = enabled_staff();
    let usecase = DisableMfaUseCase {
        staffs: MockStaffRepo::with_staff(staff.clone()),
    };

    let result = usecase.execute(&staff, "not the password").await;
    assert!(
        matches!(result, Err(ApiServiceError::IncorrectPassword)),
        "expected IncorrectPassword, got {result:?}"
    );
    assert!(usecase.staffs.staff(staff.id).is_mfa_enabled);
}

#[tokio::test]
async fn should_clear_secret_and_recovery_codes_on_disable() {
    let staff = enabled_staff();
    let repo = MockStaffRepo::with_staff(staff.clone());
    repo.recovery_hashes
        .lock()
        .unwrap()
        .insert(staff.id, vec![hash_recovery_code("ABCDE-12345")]);
    let usecase = DisableMfaUseCase { staffs: repo };

    usecase.execute(&staff, TEST_PASSWORD).await.unwrap();

    let stored = usecase.staffs.staff(staff.id);
    assert!(!stored.is_mfa_enabled);
    assert!(stored.mfa_secret.is_none());
    assert!(usecase.staffs.recovery_hashes(staff.id).is_empty());
}
