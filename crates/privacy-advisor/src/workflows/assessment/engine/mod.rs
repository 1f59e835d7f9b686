mod rules;

pub use rules::{Rule, STANDARD_RULES};

use super::answers::AnswerSet;
use super::domain::Recommendation;
use super::report::{format, FormattedAssessment};
use serde::Serialize;
use tracing::debug;

/// Stateless evaluator that runs every catalog rule against an answer set.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_RULES.to_vec())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates all rules in catalog order. Every matching rule fires; there
    /// is no short-circuit between rules.
    pub fn process(&self, answers: &AnswerSet) -> EngineOutcome {
        let mut outcome = EngineOutcome::default();

        for rule in &self.rules {
            let fired = rule.matches(answers);
            debug!(rule = ?rule.id(), fired, "evaluated rule");
            if fired {
                outcome.record(rule.recommendation());
            }
        }

        debug!(
            fired = outcome.recommendations.len(),
            total_risk_score = outcome.total_risk_score,
            "rule evaluation complete"
        );
        outcome
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Raw engine output: recommendations in evaluation order and the uncapped score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineOutcome {
    recommendations: Vec<Recommendation>,
    total_risk_score: u32,
}

impl EngineOutcome {
    fn record(&mut self, recommendation: Recommendation) {
        self.total_risk_score = self
            .total_risk_score
            .saturating_add(recommendation.risk_score);
        self.recommendations.push(recommendation);
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn total_risk_score(&self) -> u32 {
        self.total_risk_score
    }

    pub fn into_parts(self) -> (Vec<Recommendation>, u32) {
        (self.recommendations, self.total_risk_score)
    }

    pub fn format(self) -> FormattedAssessment {
        let (recommendations, total_risk_score) = self.into_parts();
        format(recommendations, total_risk_score)
    }
}
