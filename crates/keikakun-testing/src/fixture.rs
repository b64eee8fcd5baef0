//! Request-body fixtures.

use serde_json::{Value, json};

/// A complete welfare recipient registration body with one disability detail
/// per entry in `categories`.
pub fn registration_body(categories: &[&str]) -> Value {
    let details: Vec<Value> = categories
        .iter()
        .map(|c| {
            json!({
                "category": c,
                "grade_or_level": "2級",
                "application_status": "acquired"
            })
        })
        .collect();
    json!({
        "basic_info": {
            "last_name": "山田",
            "first_name": "太郎",
            "last_name_furigana": "やまだ",
            "first_name_furigana": "たろう",
            "birth_day": "1990-04-01",
            "gender": "male"
        },
        "contact_address": {
            "address": "東京都千代田区1-1-1",
            "form_of_residence": "home_with_family",
            "tel": "03-0000-0000"
        },
        "emergency_contacts": [{
            "last_name": "山田",
            "first_name": "花子",
            "relationship": "母",
            "tel": "090-0000-0000",
            "priority": 1
        }],
        "disability_info": {
            "disability_or_disease_name": "統合失調症",
            "livelihood_protection": false
        },
        "disability_details": details
    })
}
