use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::workflows::assessment::answers::{AnswerSet, QuestionKey, YesNo};
use crate::workflows::assessment::domain::{Category, Priority, Recommendation, RuleId};
use crate::workflows::assessment::engine::RuleEngine;
use crate::workflows::assessment::{assessment_router, AssessmentPolicy, AssessmentService};

pub(super) const YES_NO_KEYS: [QuestionKey; 8] = [
    QuestionKey::PasswordReuse,
    QuestionKey::PasswordManager,
    QuestionKey::TwoFactor,
    QuestionKey::PublicWifi,
    QuestionKey::Vpn,
    QuestionKey::OsUpdate,
    QuestionKey::BackupData,
    QuestionKey::EmailEncryption,
];

pub(super) fn engine() -> RuleEngine {
    RuleEngine::standard()
}

pub(super) fn assessed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
}

/// Every yes/no question answered "no", both list questions empty.
pub(super) fn all_no_answers() -> AnswerSet {
    YES_NO_KEYS
        .iter()
        .fold(AnswerSet::new(), |answers, key| answers.with_yes_no(*key, YesNo::No))
        .with_list(QuestionKey::AppPermissions, Vec::<String>::new())
        .with_list(QuestionKey::SocialMedia, Vec::<String>::new())
}

/// Careful user: nothing should fire.
pub(super) fn hygienic_answers() -> AnswerSet {
    AnswerSet::new()
        .with_yes_no(QuestionKey::PasswordReuse, YesNo::No)
        .with_yes_no(QuestionKey::PasswordManager, YesNo::Yes)
        .with_yes_no(QuestionKey::TwoFactor, YesNo::Yes)
        .with_yes_no(QuestionKey::PublicWifi, YesNo::Yes)
        .with_yes_no(QuestionKey::Vpn, YesNo::Yes)
        .with_yes_no(QuestionKey::OsUpdate, YesNo::Yes)
        .with_yes_no(QuestionKey::BackupData, YesNo::Yes)
        .with_yes_no(QuestionKey::EmailEncryption, YesNo::Yes)
        .with_list(QuestionKey::AppPermissions, ["None"])
        .with_list(QuestionKey::SocialMedia, ["Mastodon"])
}

/// Every rule fires.
pub(super) fn worst_case_answers() -> AnswerSet {
    AnswerSet::new()
        .with_yes_no(QuestionKey::PasswordReuse, YesNo::Yes)
        .with_yes_no(QuestionKey::PasswordManager, YesNo::No)
        .with_yes_no(QuestionKey::TwoFactor, YesNo::No)
        .with_yes_no(QuestionKey::PublicWifi, YesNo::Yes)
        .with_yes_no(QuestionKey::Vpn, YesNo::No)
        .with_yes_no(QuestionKey::OsUpdate, YesNo::No)
        .with_yes_no(QuestionKey::BackupData, YesNo::No)
        .with_yes_no(QuestionKey::EmailEncryption, YesNo::No)
        .with_list(
            QuestionKey::AppPermissions,
            ["Location", "Contacts", "Camera", "Microphone"],
        )
        .with_list(
            QuestionKey::SocialMedia,
            ["Facebook", "Instagram", "Twitter", "TikTok", "LinkedIn"],
        )
        .with_list(QuestionKey::Devices, ["Laptop", "Phone"])
}

pub(super) fn recommendation(
    rule: RuleId,
    priority: Priority,
    category: Category,
    risk_score: u32,
) -> Recommendation {
    Recommendation {
        rule,
        priority,
        category,
        message: "message",
        details: "details",
        action: "action",
        risk_score,
    }
}

pub(super) fn rule_ids(recommendations: &[Recommendation]) -> Vec<RuleId> {
    recommendations.iter().map(|rec| rec.rule).collect()
}

pub(super) fn service(require_complete_answers: bool) -> AssessmentService {
    AssessmentService::standard(AssessmentPolicy {
        require_complete_answers,
    })
}

pub(super) fn router(require_complete_answers: bool) -> axum::Router {
    assessment_router(Arc::new(service(require_complete_answers)))
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
