use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::answers::AnswerSet;
use super::engine::RuleEngine;
use super::questionnaire::{IncompleteAnswers, Questionnaire};
use super::report::AssessmentReport;
use crate::config::AdvisorConfig;

/// Caller-facing switches applied around the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessmentPolicy {
    pub require_complete_answers: bool,
}

impl From<&AdvisorConfig> for AssessmentPolicy {
    fn from(config: &AdvisorConfig) -> Self {
        Self {
            require_complete_answers: config.require_complete_answers,
        }
    }
}

/// Service composing the questionnaire, rule engine, and result formatter.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    engine: RuleEngine,
    questionnaire: Questionnaire,
    policy: AssessmentPolicy,
}

impl AssessmentService {
    pub fn new(engine: RuleEngine, questionnaire: Questionnaire, policy: AssessmentPolicy) -> Self {
        Self {
            engine,
            questionnaire,
            policy,
        }
    }

    pub fn standard(policy: AssessmentPolicy) -> Self {
        Self::new(RuleEngine::standard(), Questionnaire::standard(), policy)
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn policy(&self) -> AssessmentPolicy {
        self.policy
    }

    /// Score an answer set and build the prioritized report.
    pub fn assess(
        &self,
        answers: AnswerSet,
        assessed_at: NaiveDateTime,
    ) -> Result<AssessmentReport, AssessmentError> {
        if self.policy.require_complete_answers {
            if let Err(err) = self.questionnaire.validate(&answers) {
                warn!(question = err.question.key(), "rejected incomplete answers");
                return Err(err.into());
            }
        }

        let formatted = self.engine.process(&answers).format();
        let report = AssessmentReport::new(answers, formatted, assessed_at);

        info!(
            risk_level = report.risk_level.label(),
            risk_score = report.risk_score,
            recommendations = report.recommendations.len(),
            "assessment complete"
        );

        Ok(report)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteAnswers),
}
