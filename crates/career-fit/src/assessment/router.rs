use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::bank::LIKERT_LABELS;
use super::domain::{AssessmentResults, Section, SectionAnswers};
use super::guidance::field_overview;
use super::recommendation::round_score;
use super::service::AssessmentService;

/// Router builder exposing the question bank and scoring endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/overview", get(overview_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .route(
            "/api/v1/assessment/sections/:section/score",
            post(section_score_handler),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let payload = json!({
        "scoring_mode": service.scoring_mode(),
        "likert_labels": LIKERT_LABELS,
        "sections": service.bank().listings(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn overview_handler() -> Response {
    (StatusCode::OK, Json(field_overview())).into_response()
}

pub(crate) async fn results_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(results): Json<AssessmentResults>,
) -> Response {
    let report = service.report(&results);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn section_score_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(section): Path<String>,
    Json(answers): Json<SectionAnswers>,
) -> Response {
    let section = match section.parse::<Section>() {
        Ok(section) => section,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    let scored = service.score_section(section, &answers);
    let payload = json!({
        "section": scored.section,
        "score": round_score(scored.score),
        "answered": scored.answered,
    });
    (StatusCode::OK, Json(payload)).into_response()
}
