use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessment::{
    assessment_router, AssessmentResults, AssessmentService, QuestionBank, ScoringMode, Section,
    SectionAnswers,
};

pub(super) fn service(mode: ScoringMode) -> Arc<AssessmentService> {
    Arc::new(AssessmentService::standard(mode))
}

pub(super) fn router(mode: ScoringMode) -> Router {
    assessment_router(service(mode))
}

/// Every question in `section` answered with the same token.
pub(super) fn uniform_answers(section: Section, token: &str) -> SectionAnswers {
    QuestionBank::standard()
        .questions(section)
        .iter()
        .map(|question| (question.id, token))
        .collect()
}

pub(super) fn uniform_results(psychological: &str, technical: &str, wiscar: &str) -> AssessmentResults {
    AssessmentResults::new()
        .record_section(
            Section::Psychological,
            uniform_answers(Section::Psychological, psychological),
        )
        .record_section(Section::Technical, uniform_answers(Section::Technical, technical))
        .record_section(Section::Wiscar, uniform_answers(Section::Wiscar, wiscar))
}

pub(super) fn json_post(uri: &str, payload: &impl serde::Serialize) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize payload")))
        .expect("build request")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("build request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
