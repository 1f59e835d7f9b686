use super::super::answers::AnswerSet;
use super::super::domain::{Category, Priority, Recommendation, RiskLevel, RuleId};
use super::summary::SummaryStats;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub rank: usize,
    pub rule: RuleId,
    pub priority: Priority,
    pub priority_label: &'static str,
    pub category: Category,
    pub category_label: &'static str,
    pub message: &'static str,
    pub details: &'static str,
    pub action: &'static str,
    pub risk_score: u32,
}

impl RecommendationView {
    pub fn from_recommendation(rank: usize, rec: &Recommendation) -> Self {
        Self {
            rank,
            rule: rec.rule,
            priority: rec.priority,
            priority_label: rec.priority.label(),
            category: rec.category,
            category_label: rec.category.label(),
            message: rec.message,
            details: rec.details,
            action: rec.action,
            risk_score: rec.risk_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityBucketView {
    pub priority: Priority,
    pub priority_label: &'static str,
    pub recommendations: Vec<RecommendationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReportView {
    pub assessed_at: NaiveDateTime,
    pub risk_score: u32,
    pub displayed_score: u32,
    pub score_display: String,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub risk_color: &'static str,
    pub stats: SummaryStats,
    pub recommendations: Vec<RecommendationView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<PriorityBucketView>,
    pub answers: AnswerSet,
}
