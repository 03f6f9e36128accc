pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

/// Headroom above the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.resume_max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job search
        .route("/api/v1/jobs/search", post(jobs::handle_search))
        .route("/search", post(jobs::handle_legacy_search))
        // Resume analysis
        .route("/api/v1/resume/analyze", post(resume::handle_analyze_text))
        .route(
            "/api/v1/resume/analyze-file",
            post(resume::handle_analyze_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Autocomplete, recommendations and notifications
        .route("/api/v1/suggestions", get(suggestions::handle_suggestions))
        .route(
            "/api/v1/recommendations",
            post(suggestions::handle_recommendations),
        )
        .route(
            "/api/v1/notifications",
            post(suggestions::handle_notifications),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::catalog::Catalog;
    use crate::jobs::engine::{JobRelevanceEngine, SearchPolicy};
    use crate::jobs::service::JobSearchService;
    use crate::resume::analyzer::ResumeTextScorer;

    const BOUNDARY: &str = "scout-test-boundary";

    fn test_state(max_upload: usize) -> AppState {
        let policy = SearchPolicy::default();
        let engine = JobRelevanceEngine::new(Arc::new(Catalog::builtin()), policy.clone());
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                google_api_key: None,
                search_engine_id: None,
                search_timeout_secs: 1,
                search_policy: policy,
                resume_max_upload_bytes: max_upload,
            },
            job_search: Arc::new(JobSearchService::new(None, engine)),
            resume_scorer: Arc::new(ResumeTextScorer::new()),
        }
    }

    fn app() -> Router {
        build_router(test_state(1024 * 1024))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    /// (field name, optional file name, content)
    fn multipart_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            let disposition = match file_name {
                Some(file_name) => format!("name=\"{name}\"; filename=\"{file_name}\""),
                None => format!("name=\"{name}\""),
            };
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; {disposition}\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/analyze-file")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn multipart_upload(file_name: &str, content: &[u8]) -> Request<Body> {
        multipart_request(&[("file", Some(file_name), content)])
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "scout-api");
    }

    #[tokio::test]
    async fn test_search_without_provider_serves_catalog() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/jobs/search", json!({ "query": "Frontend Developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "catalog");
        assert_eq!(body["fallback_reason"], "not_configured");
        assert_eq!(body["start"], 1);
        assert_eq!(body["page_size"], 10);
        assert_eq!(body["jobs"][0]["title"], "Frontend Developer");
        assert_eq!(body["jobs"][0]["location"], "Remote");
    }

    #[tokio::test]
    async fn test_legacy_search_returns_job_array() {
        let (status, body) = send(
            app(),
            post_json(
                "/search",
                json!({
                    "query": "developer",
                    "location": "Bangalore",
                    "experience_level": ["Fresher"],
                    "platforms": ["All"],
                    "limit": 10
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert!(!jobs.is_empty() && jobs.len() <= 10);
        assert!(jobs[0]["id"].is_string());
    }

    #[tokio::test]
    async fn test_search_rejects_start_zero() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/jobs/search", json!({ "query": "rust", "start": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_sort() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/jobs/search",
                json!({ "query": "rust", "sort_by": "popularity" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_rejects_negative_start() {
        let (status, body) = send(
            app(),
            post_json("/search", json!({ "query": "rust", "start": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resume/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"text\": "))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/resume/analyze",
                json!({ "text": "jane@example.com\nExperience\nEducation\nSkills\nProjects" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // 5 email + 40 sections + 5 short + 15 extraction
        assert_eq!(body["score"], 65);
        assert_eq!(body["checks"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_blank() {
        let (status, _) = send(
            app(),
            post_json("/api/v1/resume/analyze", json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_file_rejects_non_pdf() {
        let (status, body) = send(app(), multipart_upload("resume.docx", b"PK\x03\x04")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Only PDF files"));
    }

    #[tokio::test]
    async fn test_analyze_file_rejects_oversized_upload() {
        let app = build_router(test_state(16));
        let (status, body) = send(app, multipart_upload("resume.pdf", &[b'%'; 64])).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_body_limit_while_skipping_other_fields() {
        let app = build_router(test_state(16));
        let notes = vec![b'a'; MULTIPART_OVERHEAD_BYTES + 1024];
        let request = multipart_request(&[
            ("notes", None, notes.as_slice()),
            ("file", Some("resume.pdf"), &b"%PDF-1.4"[..]),
        ]);
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_analyze_file_requires_file_field() {
        let request = multipart_request(&[("notes", None, &b"hello"[..])]);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("'file'"));
    }

    #[tokio::test]
    async fn test_analyze_file_unreadable_pdf() {
        let (status, _) = send(
            app(),
            multipart_upload("resume.pdf", b"%PDF-1.4 not really a pdf"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_suggestions() {
        let (status, body) = send(app(), get("/api/v1/suggestions?type=location&query=new")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["New York"]));

        let (status, body) = send(app(), get("/api/v1/suggestions?type=planet&query=mars")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_recommendations() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/recommendations",
                json!({ "skills": [], "job_preferences": [], "experience_level": "Fresher" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["skill"], "Git");
        assert_eq!(body[1]["skill"], "Communication");
    }

    #[tokio::test]
    async fn test_notifications() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/notifications",
                json!({
                    "skills": ["Rust"],
                    "job_preferences": ["Backend Developer"],
                    "linkedin_url": "https://linkedin.com/in/jane",
                    "resume_score": 55,
                    "preferred_locations": ["Pune"]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["profile-incomplete", "resume-score", "your-skills", "skill-Python", "new-jobs"]
        );
        assert_eq!(body[1]["type"], "alert");
    }

    #[tokio::test]
    async fn test_notifications_reject_wrong_types() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/notifications", json!({ "resume_score": "high" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
