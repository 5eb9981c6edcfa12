pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/preview-match",
            post(handlers::handle_preview_match),
        )
        .route("/api/v1/matches/:id", get(handlers::handle_get_match))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::engine::tests::{StubMatcher, GOOD_ANSWER};
    use crate::matching::engine::{MatchEngine, REQUIRED_FIELDS_GAP};
    use crate::matching::store::tests::MemoryMatchStore;
    use crate::matching::store::MatchStore;

    fn test_config(heuristic_fallback: bool) -> Config {
        Config {
            database_url: None,
            openai_api_key: "test-key".to_string(),
            llm_base_url: "http://127.0.0.1:9".to_string(),
            llm_timeout_secs: 1,
            heuristic_fallback,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn test_state(
        stub: Arc<StubMatcher>,
        store: Option<Arc<MemoryMatchStore>>,
        heuristic_fallback: bool,
    ) -> AppState {
        AppState {
            engine: Arc::new(MatchEngine::new(stub)),
            store: store.map(|s| s as Arc<dyn MatchStore>),
            config: test_config(heuristic_fallback),
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(router, request).await
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_returns_flat_result_and_stores_it() {
        let store = Arc::new(MemoryMatchStore::default());
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub, Some(store.clone()), false));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({"resume_text": "Python dev", "job_description_text": "Python + SQL", "user_id": "u-7"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "semantic");
        assert_eq!(body["covered_skills"], json!(["python"]));
        assert_eq!(body["missing_skills"], json!(["sql"]));
        assert!(body["record_id"].is_string());

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = records.values().next().unwrap();
        assert_eq!(record.user_id.as_deref(), Some("u-7"));
    }

    #[tokio::test]
    async fn test_match_blank_input_is_degenerate_and_not_stored() {
        let store = Arc::new(MemoryMatchStore::default());
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub.clone(), Some(store.clone()), false));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({"cv_text": "", "jd_text": "Python backend"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], json!(0.0));
        assert_eq!(body["gaps"], json!([REQUIRED_FIELDS_GAP]));
        assert!(body.get("record_id").is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_match_parse_failure_is_bad_gateway() {
        let stub = Arc::new(StubMatcher::answering(&GOOD_ANSWER.replace("0.9", "1.3")));
        let router = build_router(test_state(stub, None, true));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({"resume_text": "r", "job_description_text": "j"}),
        )
        .await;

        // Fallback never masks a parse failure.
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_match_unavailable_without_fallback() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({"resume_text": "r", "job_description_text": "j"}),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "LLM_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_match_unavailable_falls_back_to_heuristic() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, true));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({
                "resume_text": "Built REST APIs with Python and FastAPI experience",
                "job_description_text": "Looking for Python backend engineer with FastAPI skills"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "heuristic");
        assert_eq!(body["semantic_score"], json!(0.4));
        assert_eq!(body["strengths"], json!(["fastapi", "python"]));
    }

    #[tokio::test]
    async fn test_explicit_heuristic_mode_skips_llm() {
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub.clone(), None, false));

        let (status, body) = post_json(
            router,
            "/api/v1/match",
            json!({"resume_text": "rust sql", "job_description_text": "rust go", "mode": "heuristic"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "heuristic");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_preview_match() {
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub.clone(), None, false));

        let (status, body) = post_json(
            router,
            "/api/v1/preview-match",
            json!({
                "cv_text": "Built REST APIs with Python and FastAPI experience",
                "jd_text": "Looking for Python backend engineer with FastAPI skills"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], json!(0.4));
        assert_eq!(body["gaps"], json!(["backend", "engineer", "skills"]));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_preview_blank_input() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));

        let (status, body) = post_json(
            router,
            "/api/v1/preview-match",
            json!({"resume_text": "resume", "job_description_text": "  "}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gaps"], json!([REQUIRED_FIELDS_GAP]));
        assert_eq!(body["role_keywords"], json!([]));
    }

    #[tokio::test]
    async fn test_get_match_round_trip_and_not_found() {
        let store = Arc::new(MemoryMatchStore::default());
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub, Some(store), false));

        let (_, created) = post_json(
            router.clone(),
            "/api/v1/match",
            json!({"resume_text": "Python dev", "job_description_text": "Python + SQL"}),
        )
        .await;
        let id = created["record_id"].as_str().unwrap().to_string();

        let request = Request::get(format!("/api/v1/matches/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["match_mode"], "semantic");

        let request = Request::get(format!("/api/v1/matches/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_match_without_store() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));
        let request = Request::get(format!("/api/v1/matches/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PERSISTENCE_DISABLED");
    }

    #[tokio::test]
    async fn test_match_missing_field_is_validation_error() {
        let stub = Arc::new(StubMatcher::answering(GOOD_ANSWER));
        let router = build_router(test_state(stub.clone(), None, false));

        let (status, body) =
            post_json(router, "/api/v1/match", json!({"resume_text": "Python"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Missing required field: job_description_text"
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_preview_malformed_json_is_validation_error() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/preview-match")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_without_json_content_type_is_validation_error() {
        let router = build_router(test_state(Arc::new(StubMatcher::unavailable()), None, false));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .body(Body::from(r#"{"resume_text": "r", "job_description_text": "j"}"#))
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
