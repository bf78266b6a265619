pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::board::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/recent-jobs", get(handlers::handle_recent_jobs))
        .route("/api/v1/jobs/:id", get(handlers::handle_get_job))
        // Saved jobs
        .route("/api/v1/saved-jobs", get(handlers::handle_list_saved))
        .route(
            "/api/v1/saved-jobs/:id",
            put(handlers::handle_save_job).delete(handlers::handle_unsave_job),
        )
        .route(
            "/api/v1/saved-jobs/:id/toggle",
            post(handlers::handle_toggle_saved),
        )
        // Alerts and skills
        .route(
            "/api/v1/alerts",
            get(handlers::handle_list_alerts).post(handlers::handle_create_alert),
        )
        .route("/api/v1/skills/match", post(handlers::handle_skill_match))
        // Skills assessment
        .route("/api/v1/assessments", post(handlers::handle_create_assessment))
        .route(
            "/api/v1/assessments/latest",
            get(handlers::handle_latest_assessment),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::job::JobCatalog;
    use crate::store::{InMemoryKeyValueStore, JobStore};

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(JobCatalog::default()),
            store: JobStore::new(Arc::new(InMemoryKeyValueStore::new())),
            config: Config {
                database_url: None,
                port: 0,
                rust_log: "debug".to_string(),
                items_per_page: 3,
                share_base_url: "https://devhope.ph/jobs".to_string(),
                jobs_seed_path: None,
            },
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn job_ids(view: &Value) -> Vec<u64> {
        view["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_jobs_defaults() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(job_ids(&body), vec![3, 6, 1]);
        assert_eq!(body["total_matches"], 6);
        assert_eq!(body["pagination"]["total_pages"], 2);
        assert_eq!(body["jobs"][0]["type"], "Full-time");
        assert_eq!(body["jobs"][2]["skill_match"]["percentage"], 67);
    }

    #[tokio::test]
    async fn test_list_jobs_filters_sorts_and_pages() {
        let app = build_router(test_state());
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/jobs?sort=salary-desc&page=2",
            None,
        )
        .await;
        assert_eq!(job_ids(&body), vec![2, 6, 4]);

        let (_, body) = send(&app, Method::GET, "/api/v1/jobs?location=Remote", None).await;
        assert_eq!(job_ids(&body), vec![3, 5]);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_ignored() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs?page=7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["current_page"], 1);
    }

    #[tokio::test]
    async fn test_match_sort_with_custom_skills() {
        let app = build_router(test_state());
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/jobs?sort=match&skills=Data%20Entry,Excel",
            None,
        )
        .await;
        assert_eq!(job_ids(&body)[0], 5);
        assert_eq!(body["jobs"][0]["skill_match"]["percentage"], 67);
    }

    #[tokio::test]
    async fn test_skill_edits_apply_to_match_sort() {
        let app = build_router(test_state());
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/jobs?sort=match&skills=Data%20Entry,Sales&add_skill=MS%20Excel&remove_skill=Sales",
            None,
        )
        .await;
        assert_eq!(body["jobs"][0]["id"], 5);
        assert_eq!(
            body["jobs"][0]["skill_match"]["matched_skills"],
            json!(["Data Entry", "MS Excel"])
        );
        assert_eq!(body["jobs"][0]["skill_match"]["percentage"], 67);
    }

    #[tokio::test]
    async fn test_unknown_sort_is_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs?sort=newest", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_non_numeric_job_id_is_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_alert_body_is_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/alerts",
            Some(json!({ "filters": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_saved_jobs_flow() {
        let app = build_router(test_state());

        let (status, _) = send(&app, Method::PUT, "/api/v1/saved-jobs/5", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, "/api/v1/saved-jobs", None).await;
        assert_eq!(body["ids"], json!([5]));
        assert_eq!(body["jobs"][0]["title"], "Data Entry Specialist");

        let (_, body) = send(&app, Method::GET, "/api/v1/jobs?saved_only=true", None).await;
        assert_eq!(job_ids(&body), vec![5]);
        assert_eq!(body["jobs"][0]["saved"], true);

        let (status, _) = send(&app, Method::DELETE, "/api/v1/saved-jobs/5", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, Method::GET, "/api/v1/saved-jobs", None).await;
        assert_eq!(body["ids"], json!([]));
    }

    #[tokio::test]
    async fn test_toggle_saved() {
        let app = build_router(test_state());
        let (_, body) = send(&app, Method::POST, "/api/v1/saved-jobs/2/toggle", None).await;
        assert_eq!(body["saved"], true);
        let (_, body) = send(&app, Method::POST, "/api/v1/saved-jobs/2/toggle", None).await;
        assert_eq!(body["saved"], false);
    }

    #[tokio::test]
    async fn test_save_unknown_job_is_404() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::PUT, "/api/v1/saved-jobs/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_job_detail_with_share_links() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["company"], "Retail Solutions Inc.");
        assert_eq!(body["saved"], false);
        assert_eq!(body["share"]["url"], "https://devhope.ph/jobs?share=4");

        let (status, _) = send(&app, Method::GET, "/api/v1/jobs/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_recent_jobs() {
        let app = build_router(test_state());
        let (_, body) = send(&app, Method::GET, "/api/v1/recent-jobs", None).await;
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 6]);
    }

    #[tokio::test]
    async fn test_create_and_list_alerts() {
        let app = build_router(test_state());
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/alerts",
            Some(json!({
                "email": "maria@example.com",
                "filters": { "searchTerm": "assistant", "location": "" }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["filters"], json!({ "searchTerm": "assistant" }));

        let (_, listed) = send(&app, Method::GET, "/api/v1/alerts", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["email"], "maria@example.com");
    }

    #[tokio::test]
    async fn test_invalid_alert_email_is_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/alerts",
            Some(json!({ "email": "maria@", "filters": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please enter a valid email address.");

        let (_, listed) = send(&app, Method::GET, "/api/v1/alerts", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_skill_match_endpoint() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/skills/match",
            Some(json!({
                "required": ["Communication", "Customer Service"],
                "possessed": ["Communication", "Customer Service"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["percentage"], 100);
        assert_eq!(body["stars"], 5.0);
        assert_eq!(body["label"], "Excellent Match");
    }

    #[tokio::test]
    async fn test_assessment_flow() {
        let app = build_router(test_state());
        let (status, _) = send(&app, Method::GET, "/api/v1/assessments/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/assessments",
            Some(json!({
                "skills": ["communication", "customer-service", "excel"],
                "softSkills": ["teamwork", "adaptability"],
                "experienceYears": 3,
                "educationLevel": "bachelor",
                "preferredJobTypes": ["full-time"],
                "preferredLocations": ["manila"],
                "salaryRange": [18000, 25000]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["skillAssessment"]["totalSkills"], 5);
        assert_eq!(created["jobMatches"][0]["id"], 1);
        assert_eq!(created["jobMatches"][0]["matchPercentage"], 67);

        let (status, latest) = send(&app, Method::GET, "/api/v1/assessments/latest", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(latest, created);
    }

    #[tokio::test]
    async fn test_assessment_requires_preferences() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/assessments",
            Some(json!({
                "skills": ["sales"],
                "experienceYears": 1,
                "preferredJobTypes": [],
                "preferredLocations": ["cebu"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Please select at least one preferred job type."
        );

        let (status, _) = send(&app, Method::GET, "/api/v1/assessments/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
