use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::answers::AnswerSet;
use super::report::export::render_text;
use super::service::{AssessmentError, AssessmentService};

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub answers: AnswerSet,
}

/// Router builder exposing the questionnaire and assessment endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/assessments/report", post(text_report_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.questionnaire().clone())).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<axum::Json<AssessmentRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return undecodable(rejection),
    };
    match service.assess(request.answers, Local::now().naive_local()) {
        Ok(report) => (StatusCode::OK, axum::Json(report.to_view())).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn text_report_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<axum::Json<AssessmentRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return undecodable(rejection),
    };
    match service.assess(request.answers, Local::now().naive_local()) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_text(&report),
        )
            .into_response(),
        Err(error) => rejection(error),
    }
}

/// Any payload that fails to decode is a client error, kept distinct from the
/// 422 used for incomplete answers.
fn undecodable(rejection: JsonRejection) -> Response {
    let payload = json!({ "error": rejection.body_text() });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn rejection(error: AssessmentError) -> Response {
    match error {
        AssessmentError::Incomplete(incomplete) => {
            let payload = json!({
                "error": incomplete.to_string(),
                "question": incomplete.question,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
