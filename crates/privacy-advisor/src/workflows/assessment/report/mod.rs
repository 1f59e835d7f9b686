pub mod export;
mod formatter;
mod summary;
pub mod views;

pub use formatter::{
    displayed_score, format, sort_recommendations, FormattedAssessment, DISPLAY_SCORE_CAP,
};
pub use summary::{AssessmentReport, SummaryStats};
