//! Digital privacy assessment: answer model, rule catalog, and report output.
//!
//! Answers flow through [`RuleEngine::process`], which evaluates every rule in
//! catalog order, then through [`report::format`], which orders the findings
//! and derives the risk level. [`AssessmentService`] wires both together for
//! the CLI and HTTP front-ends.

pub mod answers;
pub mod domain;
pub mod engine;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{parse_token_list, AnswerKind, AnswerSet, AnswerValue, QuestionKey, YesNo};
pub use domain::{Category, Priority, Recommendation, RiskLevel, RuleId};
pub use engine::{EngineOutcome, Rule, RuleEngine, STANDARD_RULES};
pub use questionnaire::{IncompleteAnswers, Question, Questionnaire};
pub use report::{AssessmentReport, FormattedAssessment, SummaryStats};
pub use router::{assessment_router, AssessmentRequest};
pub use service::{AssessmentError, AssessmentPolicy, AssessmentService};
