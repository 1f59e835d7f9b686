use super::super::answers::AnswerSet;
use super::super::domain::{Priority, Recommendation, RiskLevel};
use super::formatter::{displayed_score, FormattedAssessment};
use super::views::{AssessmentReportView, PriorityBucketView, RecommendationView};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Per-priority tally of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

impl SummaryStats {
    pub fn tally(recommendations: &[Recommendation], risk_score: u32) -> Self {
        let count = |priority: Priority| {
            recommendations
                .iter()
                .filter(|rec| rec.priority == priority)
                .count()
        };

        Self {
            total: recommendations.len(),
            high_priority: count(Priority::High),
            medium_priority: count(Priority::Medium),
            low_priority: count(Priority::Low),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
        }
    }

    pub fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high_priority,
            Priority::Medium => self.medium_priority,
            Priority::Low => self.low_priority,
        }
    }
}

/// Completed assessment: the answers that were scored and the formatted result.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub assessed_at: NaiveDateTime,
    pub answers: AnswerSet,
    pub recommendations: Vec<Recommendation>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

impl AssessmentReport {
    pub fn new(
        answers: AnswerSet,
        formatted: FormattedAssessment,
        assessed_at: NaiveDateTime,
    ) -> Self {
        Self {
            assessed_at,
            answers,
            recommendations: formatted.sorted_recommendations,
            risk_score: formatted.total_risk_score,
            risk_level: formatted.risk_level,
        }
    }

    pub fn displayed_score(&self) -> u32 {
        displayed_score(self.risk_score)
    }

    pub fn summary(&self) -> SummaryStats {
        SummaryStats::tally(&self.recommendations, self.risk_score)
    }

    pub fn bucket(&self, priority: Priority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |rec| rec.priority == priority)
    }

    pub fn to_view(&self) -> AssessmentReportView {
        let recommendations: Vec<RecommendationView> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, rec)| RecommendationView::from_recommendation(index + 1, rec))
            .collect();

        let buckets = Priority::ordered()
            .into_iter()
            .filter_map(|priority| {
                let entries: Vec<RecommendationView> = recommendations
                    .iter()
                    .filter(|view| view.priority == priority)
                    .cloned()
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(PriorityBucketView {
                        priority,
                        priority_label: priority.label(),
                        recommendations: entries,
                    })
                }
            })
            .collect();

        let displayed_score = self.displayed_score();

        AssessmentReportView {
            assessed_at: self.assessed_at,
            risk_score: self.risk_score,
            displayed_score,
            score_display: format!("{displayed_score}/100"),
            risk_level: self.risk_level,
            risk_level_label: self.risk_level.label(),
            risk_color: self.risk_level.color_hex(),
            stats: self.summary(),
            recommendations,
            buckets,
            answers: self.answers.clone(),
        }
    }
}
