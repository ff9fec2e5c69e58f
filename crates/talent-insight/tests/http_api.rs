//! HTTP scenarios exercised through the public router with an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use talent_insight::candidates::seed;
use talent_insight::router::{candidate_router, DashboardContext};
use talent_insight::{CandidateStore, InMemoryCandidateStore, SkillCatalog};

const BODY_LIMIT: usize = 256 * 1024;

fn seeded() -> (Arc<InMemoryCandidateStore>, Router) {
    let store = Arc::new(InMemoryCandidateStore::with_candidates(
        seed::demo_candidates(),
    ));
    let context = Arc::new(DashboardContext::new(
        store.clone(),
        SkillCatalog::standard(),
    ));
    (store, candidate_router(context))
}

async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec()
}

async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn list_returns_newest_first_and_filters_by_search() {
    let (_, router) = seeded();

    let response = router
        .clone()
        .oneshot(get("/api/v1/candidates"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
    assert_eq!(payload[0]["name"], "李白");

    // 分析师
    let response = router
        .oneshot(get("/api/v1/candidates?search=%E5%88%86%E6%9E%90%E5%B8%88"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
    assert_eq!(payload[0]["name"], "王维");
}

#[tokio::test]
async fn manual_entry_is_clamped_and_prepended() {
    let (store, router) = seeded();
    let entry = json!({
        "name": "高适",
        "role": "应急响应工程师",
        "scores": {
            "应急响应": {"theory": 150, "practice": -5},
            "业务理解": {"theory": 70, "practice": 0}
        }
    });

    let response = router
        .oneshot(post_json("/api/v1/candidates", &entry))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    let scores = payload["scores"].as_array().expect("scores array");
    assert_eq!(scores.len(), 11);
    assert!(scores.contains(&json!({"category": "应急响应", "score": 100.0, "type": "Theory"})));
    assert!(scores.contains(&json!({"category": "应急响应", "score": 0.0, "type": "Practice"})));

    let listed = store.list().expect("list");
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].name, "高适");
}

#[tokio::test]
async fn manual_entry_without_role_is_unprocessable() {
    let (store, router) = seeded();

    let response = router
        .oneshot(post_json(
            "/api/v1/candidates",
            &json!({"name": "高适", "role": "  "}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.list().expect("list").len(), 3);
}

#[tokio::test]
async fn import_reports_failing_record_and_adds_nothing() {
    let (store, router) = seeded();
    let body = r#"[
        {"name": "甲", "role": "工程师", "scores": []},
        {"name": "乙", "scores": []}
    ]"#;

    let response = router
        .oneshot(
            Request::post("/api/v1/candidates/import")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("record 2"));
    assert!(message.contains("`role`"));
    assert_eq!(store.list().expect("list").len(), 3);
}

#[tokio::test]
async fn import_accepts_single_object() {
    let (store, router) = seeded();
    let body = r#"{"name": "岑参", "role": "渗透测试工程师",
        "scores": [{"category": "渗透测试", "score": 91, "type": "Practice"}]}"#;

    let response = router
        .oneshot(
            Request::post("/api/v1/candidates/import")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["imported"], 1);
    assert_eq!(store.list().expect("list")[0].summary, "批量导入数据");
}

#[tokio::test]
async fn candidate_and_report_lookups() {
    let (_, router) = seeded();

    let response = router
        .clone()
        .oneshot(get("/api/v1/candidates/c-001/report"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_average"], 62.0);
    assert_eq!(payload["radar"].as_array().map(Vec::len), Some(6));

    let response = router
        .oneshot(get("/api/v1/candidates/c-404"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analytics_snapshot_covers_all_views() {
    let (_, router) = seeded();

    let response = router
        .oneshot(get("/api/v1/analytics"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overview"]["totalCandidates"], 3);
    assert_eq!(
        payload["weakness"]["learning_plan"].as_array().map(Vec::len),
        Some(3)
    );
    let full_plan = payload["weakness"]["full_plan"]
        .as_array()
        .expect("full plan array");
    let ranking = payload["weakness"]["ranking"]
        .as_array()
        .expect("ranking array");
    assert_eq!(full_plan.len(), 6);
    for (rank, (item, entry)) in full_plan.iter().zip(ranking).enumerate() {
        assert_eq!(item["rank"], rank + 1);
        assert_eq!(item["category"], entry["category"]);
    }
    assert_eq!(
        payload["quadrant"]["placements"].as_array().map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn export_serves_word_attachment() {
    let (_, router) = seeded();

    let response = router
        .oneshot(get("/api/v1/analytics/export?view=training&date=2025-12-01"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some("application/msword".as_bytes())
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("attachment header");
    let disposition = String::from_utf8(disposition.as_bytes().to_vec()).expect("utf-8");
    assert!(disposition.contains("人才盘点分析报告_2025-12-01.doc"));

    let body = String::from_utf8(read_body(response).await).expect("utf-8 body");
    assert!(body.contains("培训视角分析 - 技能短板"));
}

#[tokio::test]
async fn export_rejects_unknown_view() {
    let (_, router) = seeded();

    let response = router
        .oneshot(get("/api/v1/analytics/export?view=finance"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_actions_drive_navigation() {
    let (_, router) = seeded();

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/session/actions",
            &json!({"action": "select_candidate", "value": "c-003"}),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["screen"]["kind"], "report");
    assert_eq!(payload["screen"]["candidateId"], "c-003");

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/session/actions",
            &json!({"action": "select_candidate", "value": "c-404"}),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(get("/api/v1/session"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["screen"]["candidateId"], "c-003");
    assert_eq!(payload["analytics"], "enterprise");
}
