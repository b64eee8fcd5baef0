//! User-facing message table.
//!
//! Every error and status message a client can see is defined here, keyed by
//! constant name. The table is read-only and fixed at compile time; services
//! reference it from their error `Display` impls and response bodies.

/// Japanese messages (the product's only locale).
pub mod ja {
    // ── Authentication ───────────────────────────────────────────────────────
    pub const AUTH_COULD_NOT_VALIDATE: &str = "認証情報を検証できませんでした";
    pub const AUTH_INCORRECT_PASSWORD: &str = "パスワードが正しくありません";
    pub const AUTH_STAFF_NOT_FOUND: &str = "スタッフが見つかりません";
    pub const BILLING_INACTIVE: &str =
        "お支払いが確認できないため、この操作は実行できません。お支払い状況をご確認ください";

    // ── MFA ──────────────────────────────────────────────────────────────────
    pub const MFA_ALREADY_ENABLED: &str = "多要素認証は既に有効です";
    pub const MFA_NOT_ENROLLED: &str = "多要素認証の登録が開始されていません";
    pub const MFA_NOT_ENABLED: &str = "多要素認証は有効になっていません";
    pub const MFA_INVALID_CODE: &str = "認証コードが正しくありません";
    pub const MFA_VERIFICATION_SUCCESS: &str = "多要素認証が有効になりました";
    pub const MFA_DISABLED_SUCCESS: &str = "多要素認証を無効にしました";

    // ── Welfare recipients ───────────────────────────────────────────────────
    pub const RECIPIENT_CATEGORY_MISSING: &str = "障害の種類（カテゴリ）が入力されていません";
    pub const RECIPIENT_MUST_HAVE_OFFICE: &str =
        "利用者を登録するには事業所に所属している必要があります";
    pub const RECIPIENT_DISABILITY_CATEGORY_MISSING: &str =
        "障害の種類（カテゴリ）が正しくありません。選択し直してください";
    pub const RECIPIENT_INVALID_INPUT: &str = "入力内容に誤りがあります";
    pub const RECIPIENT_NAME_REQUIRED: &str = "利用者の姓と名は必須です";
    pub const RECIPIENT_BIRTH_DAY_IN_FUTURE: &str = "生年月日に未来の日付は指定できません";
    pub const RECIPIENT_CREATE_SUCCESS: &str = "利用者を登録しました";
    pub const EMPLOYEE_REQUEST_PENDING: &str =
        "承認リクエストを送信しました。管理者の承認後に反映されます";

    // ── Generic ──────────────────────────────────────────────────────────────
    pub const REQUEST_BODY_INVALID: &str = "リクエストの形式が正しくありません";
    pub const INTERNAL_SERVER_ERROR: &str = "サーバー内部でエラーが発生しました";
}
