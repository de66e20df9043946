pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::skills::handlers as skill_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/skills", get(skill_handlers::handle_list_skills))
        .route(
            "/score-prediction",
            post(handlers::handle_score_prediction),
        )
        .route("/rank-resumes", post(handlers::handle_rank_resumes))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::scoring::pipeline::tests::test_pipeline;
    use crate::scoring::ranking::RankingOptions;

    const BOUNDARY: &str = "resume-score-test-boundary";

    enum Part<'a> {
        File(&'a str, &'a str, &'a str),
        Text(&'a str, &'a str),
    }

    fn multipart_body(parts: &[Part]) -> String {
        let mut body = String::new();
        for part in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match part {
                Part::File(name, file_name, content) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n{content}\r\n"
                )),
                Part::Text(name, value) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )),
            }
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            pipeline: Arc::new(test_pipeline()),
            ranking: RankingOptions::default(),
        })
    }

    async fn post_form(uri: &str, parts: &[Part<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_skills() {
        let (status, body) = get_json("/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["skill"], "python");
        assert_eq!(
            body[0]["aliases"],
            serde_json::json!(["python", "py", "python3", "python2"])
        );
    }

    #[tokio::test]
    async fn test_resolve_skill_alias() {
        let (status, body) = get_json("/skills?alias=K8s").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["skill"], "kubernetes");

        let (status, body) = get_json("/skills?alias=cobol").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_score_prediction_with_inline_jd() {
        let (status, body) = post_form(
            "/score-prediction",
            &[
                Part::File("resume", "cv.txt", "Python3 developer, Docker daily"),
                Part::Text("jd_text_input", "Hiring: Python, Docker and Kubernetes"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["message"], "Processed successfully");
        let data = &body["data"];
        assert_eq!(data["matched_skills"], serde_json::json!(["docker", "python3"]));
        assert_eq!(data["missing_skills"], serde_json::json!(["kubernetes"]));
        let lexical = data["tfidf_similarity"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&lexical));
        assert!(data["category"].is_string());
    }

    #[tokio::test]
    async fn test_score_prediction_with_jd_file() {
        let (status, body) = post_form(
            "/score-prediction",
            &[
                Part::File("resume", "cv.txt", "SQL analyst"),
                Part::File("jd_file", "jd.txt", "SQL analyst"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["tfidf_similarity"], 1.0);
        assert_eq!(body["data"]["bert_similarity"], 1.0);
    }

    #[tokio::test]
    async fn test_missing_jd_is_bad_request() {
        let (status, body) = post_form(
            "/score-prediction",
            &[Part::File("resume", "cv.txt", "Python")],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_resume_is_bad_request() {
        let (status, _) =
            post_form("/score-prediction", &[Part::Text("jd_text_input", "Python")]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_resume_format() {
        let (status, body) = post_form(
            "/score-prediction",
            &[
                Part::File("resume", "cv.odt", "binary"),
                Part::Text("jd_text_input", "Python"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA");
    }

    #[tokio::test]
    async fn test_unreadable_docx_is_unprocessable() {
        let (status, body) = post_form(
            "/score-prediction",
            &[
                Part::File("resume", "cv.docx", "not a zip archive"),
                Part::Text("jd_text_input", "Python"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_resumes_orders_and_reports_failures() {
        let (status, body) = post_form(
            "/rank-resumes",
            &[
                Part::File("resumes", "weak.txt", "Gardening and cooking"),
                Part::File("resumes", "broken.docx", "binary"),
                Part::File(
                    "resumes",
                    "strong.txt",
                    "Python engineer shipping Docker and Kubernetes services",
                ),
                Part::Text(
                    "jd_text_input",
                    "Python engineer shipping Docker and Kubernetes services",
                ),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{body}");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["resume_name"], "strong.txt");
        assert_eq!(results[1]["resume_name"], "weak.txt");
        assert!(results[0]["score"].as_f64() >= results[1]["score"].as_f64());
        assert_eq!(body["failures"][0]["resume_name"], "broken.docx");
    }

    #[tokio::test]
    async fn test_rank_resumes_with_no_files_is_empty() {
        let (status, body) =
            post_form("/rank-resumes", &[Part::Text("jd_text_input", "Python")]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["results"].as_array().unwrap().is_empty());
    }
}
