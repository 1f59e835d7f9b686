use super::common::*;
use crate::workflows::assessment::answers::AnswerSet;
use crate::workflows::assessment::domain::{Category, Priority, RiskLevel, RuleId};
use crate::workflows::assessment::report::export::{render_text, write_csv};
use crate::workflows::assessment::report::{displayed_score, format, AssessmentReport};

fn worst_case_report() -> AssessmentReport {
    let formatted = engine().process(&worst_case_answers()).format();
    AssessmentReport::new(worst_case_answers(), formatted, assessed_at())
}

#[test]
fn risk_level_thresholds_are_inclusive_lower_bounds() {
    let cases = [
        (0, RiskLevel::Low),
        (14, RiskLevel::Low),
        (15, RiskLevel::Medium),
        (29, RiskLevel::Medium),
        (30, RiskLevel::High),
        (49, RiskLevel::High),
        (50, RiskLevel::Critical),
        (130, RiskLevel::Critical),
    ];

    for (score, expected) in cases {
        assert_eq!(RiskLevel::from_score(score), expected, "score {score}");
        assert_eq!(format(Vec::new(), score).risk_level, expected);
    }
}

#[test]
fn displayed_score_is_clamped_but_classification_is_not() {
    let formatted = format(Vec::new(), 130);

    assert_eq!(formatted.displayed_score(), 100);
    assert_eq!(formatted.total_risk_score, 130);
    assert_eq!(formatted.risk_level, RiskLevel::Critical);
    assert_eq!(displayed_score(77), 77);
    assert_eq!(displayed_score(100), 100);
}

#[test]
fn sort_orders_by_priority_then_descending_points() {
    let formatted = engine().process(&worst_case_answers()).format();

    assert_eq!(
        rule_ids(&formatted.sorted_recommendations),
        vec![
            RuleId::PasswordReuse,
            RuleId::NoTwoFactor,
            RuleId::PublicWifiWithoutVpn,
            RuleId::NoPasswordManager,
            RuleId::NoOsUpdates,
            RuleId::NoVpn,
            RuleId::ExcessAppPermissions,
            RuleId::NoBackups,
            RuleId::HeavySocialMedia,
            RuleId::NoEmailEncryption,
        ]
    );
}

#[test]
fn sort_keeps_evaluation_order_for_ties() {
    use Category::*;
    let recommendations = vec![
        recommendation(RuleId::NoEmailEncryption, Priority::Low, CommunicationSecurity, 5),
        recommendation(RuleId::NoBackups, Priority::Medium, DataProtection, 10),
        recommendation(RuleId::NoPasswordManager, Priority::High, PasswordSecurity, 15),
        recommendation(RuleId::ExcessAppPermissions, Priority::Medium, PrivacySettings, 10),
        recommendation(RuleId::NoOsUpdates, Priority::High, DeviceSecurity, 15),
    ];

    let formatted = format(recommendations, 55);

    assert_eq!(
        rule_ids(&formatted.sorted_recommendations),
        vec![
            RuleId::NoPasswordManager,
            RuleId::NoOsUpdates,
            RuleId::NoBackups,
            RuleId::ExcessAppPermissions,
            RuleId::NoEmailEncryption,
        ]
    );
}

#[test]
fn all_negative_scenario_is_critical_below_gauge_cap() {
    let formatted = engine().process(&all_no_answers()).format();
    let report = AssessmentReport::new(all_no_answers(), formatted, assessed_at());

    assert_eq!(report.risk_score, 77);
    assert_eq!(report.risk_level, RiskLevel::Critical);
    assert_eq!(report.displayed_score(), 77);
    assert_eq!(report.to_view().score_display, "77/100");

    let worst = worst_case_report();
    assert_eq!(worst.displayed_score(), 100);
    assert_eq!(worst.to_view().score_display, "100/100");
}

#[test]
fn summary_tallies_priority_buckets() {
    let report = worst_case_report();
    let stats = report.summary();

    assert_eq!(stats.total, 10);
    assert_eq!(stats.high_priority, 5);
    assert_eq!(stats.medium_priority, 4);
    assert_eq!(stats.low_priority, 1);
    assert_eq!(stats.count_for(Priority::Medium), 4);
    assert_eq!(stats.risk_score, 133);
    assert_eq!(stats.risk_level, RiskLevel::Critical);
    assert_eq!(report.bucket(Priority::Low).count(), 1);
}

#[test]
fn view_groups_non_empty_buckets_in_priority_order() {
    let formatted = engine().process(&all_no_answers()).format();
    let view = AssessmentReport::new(all_no_answers(), formatted, assessed_at()).to_view();

    let labels: Vec<&str> = view.buckets.iter().map(|b| b.priority_label).collect();
    assert_eq!(labels, vec!["High", "Medium", "Low"]);
    assert_eq!(view.recommendations[0].rank, 1);
    assert_eq!(view.risk_color, "#dc2626");

    let clean = AssessmentReport::new(
        hygienic_answers(),
        engine().process(&hygienic_answers()).format(),
        assessed_at(),
    )
    .to_view();
    assert!(clean.buckets.is_empty());
    assert_eq!(clean.risk_level_label, "Low");

    let json = serde_json::to_value(&clean).expect("view serializes");
    assert!(json.get("buckets").is_none());
    assert_eq!(json["answers"]["social_media"][0], "Mastodon");
}

#[test]
fn text_export_lists_profile_and_ranked_recommendations() {
    let text = render_text(&worst_case_report());

    assert!(text.starts_with("DIGITAL PRIVACY ASSESSMENT REPORT\n"));
    assert!(text.contains("Assessment Date: 2025-03-14 09:30:00"));
    assert!(text.contains("Risk Level: Critical (Score: 133)"));
    assert!(text.contains(
        "Social Media Platforms: Facebook, Instagram, Twitter, TikTok, LinkedIn"
    ));
    assert!(text.contains("Devices Used: Laptop, Phone"));
    assert!(text.contains("Two-Factor Authentication: no"));
    assert!(text.contains("RECOMMENDATIONS (10 total)"));
    assert!(text.contains(
        "1. [HIGH] Password Security\n   Stop reusing passwords across accounts"
    ));
    assert!(text.contains("10. [LOW] Communication Security"));
    assert!(text.contains("- Privacy Guides: https://www.privacyguides.org"));
}

#[test]
fn text_export_marks_missing_answers() {
    let answers = AnswerSet::new();
    let formatted = engine().process(&answers).format();
    let report = AssessmentReport::new(answers, formatted, assessed_at());

    let text = render_text(&report);

    assert!(text.contains("Social Media Platforms: None"));
    assert!(text.contains("Password Manager: Unknown"));
    assert!(text.contains("RECOMMENDATIONS (0 total)"));
    assert!(text.contains("Risk Level: Low (Score: 0)"));
}

#[test]
fn csv_export_writes_header_and_rows_in_report_order() {
    let mut buffer = Vec::new();
    write_csv(&worst_case_report(), &mut buffer).expect("csv written");
    let csv = String::from_utf8(buffer).expect("utf8 csv");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "rank,priority,category,message,action,risk_score");
    assert!(lines[1].starts_with("1,High,Password Security,Stop reusing passwords"));
    assert!(lines[1].ends_with(",20"));
    assert!(lines[10].starts_with("10,Low,Communication Security,"));
}

#[test]
fn csv_export_of_clean_report_is_header_only() {
    let answers = hygienic_answers();
    let formatted = engine().process(&answers).format();
    let report = AssessmentReport::new(answers, formatted, assessed_at());
    let mut buffer = Vec::new();

    write_csv(&report, &mut buffer).expect("csv written");

    assert_eq!(
        String::from_utf8(buffer).expect("utf8 csv"),
        "rank,priority,category,message,action,risk_score\n"
    );
}
