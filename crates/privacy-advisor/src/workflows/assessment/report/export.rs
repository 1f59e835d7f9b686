//! Plain-text and CSV renderings of a finished assessment.

use super::super::answers::{AnswerSet, QuestionKey};
use super::summary::AssessmentReport;
use serde::Serialize;
use std::fmt;
use std::io::Write;

const RULE_WIDTH: usize = 70;

const NEXT_STEPS: [&str; 5] = [
    "Address high-priority items first",
    "Implement recommendations gradually over 30 days",
    "Re-assess your security quarterly",
    "Stay informed about emerging threats",
    "Share this tool with family and friends",
];

const RESOURCES: [(&str, &str); 3] = [
    ("Electronic Frontier Foundation (EFF)", "https://www.eff.org"),
    ("Privacy Guides", "https://www.privacyguides.org"),
    ("NIST Cybersecurity Framework", "https://www.nist.gov/cyberframework"),
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode csv export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// `Display` adapter producing the text export of a report.
pub struct TextReport<'a>(pub &'a AssessmentReport);

pub fn render_text(report: &AssessmentReport) -> String {
    TextReport(report).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "DIGITAL PRIVACY ASSESSMENT REPORT")?;
        writeln!(f, "{heavy}")?;
        writeln!(
            f,
            "Assessment Date: {}",
            report.assessed_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(
            f,
            "Risk Level: {} (Score: {})",
            report.risk_level.label(),
            report.risk_score
        )?;
        writeln!(f)?;

        writeln!(f, "USER PROFILE SUMMARY")?;
        writeln!(f, "{light}")?;
        let answers = &report.answers;
        writeln!(
            f,
            "Social Media Platforms: {}",
            joined(answers, QuestionKey::SocialMedia)
        )?;
        writeln!(f, "Devices Used: {}", joined(answers, QuestionKey::Devices))?;
        for (label, key) in [
            ("Password Manager", QuestionKey::PasswordManager),
            ("Two-Factor Authentication", QuestionKey::TwoFactor),
            ("VPN Usage", QuestionKey::Vpn),
            ("Regular OS Updates", QuestionKey::OsUpdate),
            ("Data Backup", QuestionKey::BackupData),
        ] {
            writeln!(f, "{label}: {}", answers.yes_no(key).label())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "RECOMMENDATIONS ({} total)",
            report.recommendations.len()
        )?;
        writeln!(f, "{light}")?;
        for (index, rec) in report.recommendations.iter().enumerate() {
            writeln!(f)?;
            writeln!(
                f,
                "{}. [{}] {}",
                index + 1,
                rec.priority.label().to_uppercase(),
                rec.category.label()
            )?;
            writeln!(f, "   {}", rec.message)?;
            writeln!(f)?;
            writeln!(f, "   Details: {}", rec.details)?;
            writeln!(f)?;
            writeln!(f, "   Action: {}", rec.action)?;
        }
        writeln!(f)?;

        writeln!(f, "{heavy}")?;
        writeln!(f, "NEXT STEPS")?;
        writeln!(f, "{light}")?;
        for (index, step) in NEXT_STEPS.iter().enumerate() {
            writeln!(f, "{}. {step}", index + 1)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "For more information on digital privacy and security, visit:"
        )?;
        for (name, url) in RESOURCES {
            writeln!(f, "- {name}: {url}")?;
        }
        Ok(())
    }
}

fn joined(answers: &AnswerSet, key: QuestionKey) -> String {
    let items = answers.list(key);
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

const CSV_HEADER: [&str; 6] = [
    "rank",
    "priority",
    "category",
    "message",
    "action",
    "risk_score",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    priority: &'static str,
    category: &'static str,
    message: &'a str,
    action: &'a str,
    risk_score: u32,
}

/// Writes a header row followed by one row per recommendation in report order.
pub fn write_csv<W: Write>(report: &AssessmentReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (index, rec) in report.recommendations.iter().enumerate() {
        csv_writer.serialize(CsvRow {
            rank: index + 1,
            priority: rec.priority.label(),
            category: rec.category.label(),
            message: rec.message,
            action: rec.action,
            risk_score: rec.risk_score,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
