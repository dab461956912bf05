use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Article, Backend, Task};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_is_ok() {
    let resp = app().oneshot(get_request("/api/v1/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn routes_live_under_api_prefix() {
    let resp = app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- articles ---

#[tokio::test]
async fn list_articles_default_page() {
    let resp = app().oneshot(get_request("/api/v1/articles")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 20);
    assert_eq!(body["articles"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn list_articles_filters_and_paginates() {
    let resp = app()
        .oneshot(get_request("/api/v1/articles?site=shega&page=2&per_page=1"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["total"], 2);
    let articles: Vec<Article> = serde_json::from_value(body["articles"].clone()).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, 2);
}

#[tokio::test]
async fn list_articles_filters_by_author_with_space() {
    let resp = app()
        .oneshot(get_request("/api/v1/articles?author=Hana%20Tesfaye"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn list_articles_search_is_case_insensitive() {
    let resp = app()
        .oneshot(get_request("/api/v1/articles?search=COFFEE"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn list_articles_page_zero_returns_422_with_detail() {
    let resp = app()
        .oneshot(get_request("/api/v1/articles?page=0"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "page and per_page must be positive");
}

#[tokio::test]
async fn get_article_found() {
    let resp = app().oneshot(get_request("/api/v1/articles/3")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let article: Article = body_json(resp).await;
    assert_eq!(article.slug, "coffee-exports");
}

#[tokio::test]
async fn get_article_not_found_has_detail() {
    let resp = app().oneshot(get_request("/api/v1/articles/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Article not found");
}

#[tokio::test]
async fn get_article_bad_id_returns_400_without_json() {
    let resp = app().oneshot(get_request("/api/v1/articles/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());
}

#[tokio::test]
async fn article_by_slug_decodes_escaped_segments() {
    let resp = app()
        .oneshot(get_request("/api/v1/articles/by-slug/shega/q%26a-with-founders"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let article: Article = body_json(resp).await;
    assert_eq!(article.id, 2);
}

// --- scraping ---

#[tokio::test]
async fn scrape_trigger_starts_task_then_conflicts() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/scraping/trigger", r#"{"site":"shega"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "started");
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/scraping/tasks/{task_id}")))
        .await
        .unwrap();
    let task: Task = body_json(resp).await;
    assert_eq!(task.status, "running");
    assert_eq!(task.site.as_deref(), Some("shega"));

    let resp = app
        .oneshot(json_request("POST", "/api/v1/scraping/trigger", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "A scraping job is already running");
}

#[tokio::test]
async fn unknown_task_returns_404() {
    let resp = app()
        .oneshot(get_request("/api/v1/scraping/tasks/missing"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- scheduler ---

#[tokio::test]
async fn scheduler_trigger_acknowledges() {
    let resp = app()
        .oneshot(Request::builder().method("POST").uri("/api/v1/scheduler/trigger").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "started");
}

#[tokio::test]
async fn disabled_scheduler_returns_500_with_detail() {
    let backend = Backend {
        scheduler_enabled: false,
        ..Backend::seeded()
    };
    let resp = app_with(backend)
        .oneshot(Request::builder().method("POST").uri("/api/v1/scheduler/trigger").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Scheduler unavailable");
}
