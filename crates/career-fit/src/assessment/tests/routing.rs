use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::assessment::router::{results_handler, section_score_handler};
use crate::assessment::{ScoringMode, Section};

#[tokio::test]
async fn questions_route_lists_every_section() {
    let response = router(ScoringMode::Ordinal)
        .oneshot(get("/api/v1/assessment/questions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scoring_mode"], "ordinal");
    assert_eq!(payload["likert_labels"].as_array().map(Vec::len), Some(5));

    let sections = payload["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["section"], "psychological");
    assert_eq!(sections[1]["section"], "technical");
    assert_eq!(sections[2]["section"], "wiscar");
    assert!(sections
        .iter()
        .all(|section| !section["questions"].as_array().expect("questions").is_empty()));
}

#[tokio::test]
async fn listed_questions_hide_answer_keys() {
    let response = router(ScoringMode::Keyed)
        .oneshot(get("/api/v1/assessment/questions"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    let technical = &payload["sections"][1]["questions"];
    let first = technical[0].as_object().expect("question object");
    assert!(!first.contains_key("answer_key"));
    assert!(first.contains_key("options"));
}

#[tokio::test]
async fn overview_route_describes_the_field() {
    let response = router(ScoringMode::Ordinal)
        .oneshot(get("/api/v1/assessment/overview"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["field"], "Health Informatics");
    assert_eq!(payload["career_roles"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn results_route_scores_complete_assessments() {
    let response = router(ScoringMode::Ordinal)
        .oneshot(json_post(
            "/api/v1/assessment/results",
            &uniform_results("4", "4", "4"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scores"]["overall"], 80);
    assert_eq!(payload["scores"]["recommendation"], "YES");
    assert_eq!(payload["scores"]["confidence"], 85);
    assert_eq!(payload["dimensions"].as_array().map(Vec::len), Some(6));
    assert!(payload["guidance"].is_object());
}

#[tokio::test]
async fn results_route_accepts_partial_payloads() {
    let response = router(ScoringMode::Ordinal)
        .oneshot(json_post(
            "/api/v1/assessment/results",
            &json!({ "wiscar": { "will_1": "4" } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scores"]["psychological"], 0);
    assert_eq!(payload["scores"]["wiscar"], 80);
    assert_eq!(payload["scores"]["recommendation"], "NO");
    assert!(payload.get("guidance").map_or(true, |value| value.is_null()));
}

#[tokio::test]
async fn results_handler_is_deterministic() {
    let service = service(ScoringMode::Ordinal);
    let first = results_handler(
        State(service.clone()),
        axum::Json(uniform_results("2", "3", "1")),
    )
    .await;
    let second = results_handler(State(service), axum::Json(uniform_results("2", "3", "1"))).await;

    assert_eq!(read_json_body(first).await, read_json_body(second).await);
}

#[tokio::test]
async fn section_route_scores_one_section() {
    let response = router(ScoringMode::Ordinal)
        .oneshot(json_post(
            "/api/v1/assessment/sections/psych/score",
            &json!({ "openness_1": "4", "openness_2": "2" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["section"], "psychological");
    assert_eq!(payload["score"], 60);
    assert_eq!(payload["answered"], 2);
}

#[tokio::test]
async fn section_handler_rejects_unknown_sections() {
    let response = section_score_handler(
        State(service(ScoringMode::Ordinal)),
        Path("hobbies".to_string()),
        axum::Json(uniform_answers(Section::Wiscar, "3")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "unknown assessment section 'hobbies'");
}
