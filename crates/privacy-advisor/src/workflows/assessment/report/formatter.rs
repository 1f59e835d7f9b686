use super::super::domain::{Recommendation, RiskLevel};
use super::summary::SummaryStats;
use serde::Serialize;
use std::cmp::Reverse;

/// Upper bound of the rendered score gauge. Classification ignores it.
pub const DISPLAY_SCORE_CAP: u32 = 100;

/// Recommendations in presentation order together with the derived risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAssessment {
    pub sorted_recommendations: Vec<Recommendation>,
    pub total_risk_score: u32,
    pub risk_level: RiskLevel,
}

impl FormattedAssessment {
    pub fn displayed_score(&self) -> u32 {
        displayed_score(self.total_risk_score)
    }

    pub fn stats(&self) -> SummaryStats {
        SummaryStats::tally(&self.sorted_recommendations, self.total_risk_score)
    }
}

/// Orders by priority rank, then by descending points. The sort is stable so
/// equal entries keep their rule-catalog order.
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|rec| (rec.priority.rank(), Reverse(rec.risk_score)));
}

pub fn format(
    mut recommendations: Vec<Recommendation>,
    total_risk_score: u32,
) -> FormattedAssessment {
    sort_recommendations(&mut recommendations);

    FormattedAssessment {
        sorted_recommendations: recommendations,
        total_risk_score,
        risk_level: RiskLevel::from_score(total_risk_score),
    }
}

pub const fn displayed_score(total_risk_score: u32) -> u32 {
    if total_risk_score > DISPLAY_SCORE_CAP {
        DISPLAY_SCORE_CAP
    } else {
        total_risk_score
    }
}
