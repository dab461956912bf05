//! In-memory stand-in for the analytics backend.
//!
//! Serves the subset of `/api/v1` the client integration tests exercise,
//! with the backend's error convention: non-2xx bodies are
//! `{"detail": "<message>"}`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub site: String,
    pub slug: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published_at: String,
    pub word_count: u32,
    pub sentiment: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub task_id: String,
    pub status: String,
    pub site: Option<String>,
}

#[derive(Deserialize)]
pub struct ScrapeRequest {
    pub site: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub site: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
}

/// Backend state shared by all handlers.
#[derive(Debug, Default)]
pub struct Backend {
    pub articles: Vec<Article>,
    pub tasks: HashMap<String, Task>,
    pub running_task: Option<String>,
    pub scheduler_enabled: bool,
    pub scheduler_last_run: Option<String>,
}

impl Backend {
    /// A handful of articles across three sites, scheduler enabled.
    pub fn seeded() -> Self {
        let article = |id: i64, site: &str, slug: &str, title: &str, author: Option<&str>| Article {
            id,
            title: title.to_string(),
            url: format!("https://{site}.example/{slug}"),
            site: site.to_string(),
            slug: slug.to_string(),
            author: author.map(str::to_string),
            category: Some("business".to_string()),
            published_at: format!("2024-03-{:02}T08:00:00Z", id),
            word_count: 400 + 100 * id as u32,
            sentiment: Some("neutral".to_string()),
        };
        Self {
            articles: vec![
                article(1, "shega", "test-slug", "Ethiopian startups raise record funding", Some("Abebe Kebede")),
                article(2, "shega", "q&a-with-founders", "Q&A with the founders", Some("Abebe Kebede")),
                article(3, "addis-fortune", "coffee-exports", "Coffee exports climb", Some("Hana Tesfaye")),
                article(4, "the-reporter", "telecom-liberalization", "Telecom liberalization update", None),
                article(5, "addis-fortune", "birr-outlook", "Birr outlook for the quarter", Some("Hana Tesfaye")),
            ],
            scheduler_enabled: true,
            ..Self::default()
        }
    }
}

pub type Db = Arc<RwLock<Backend>>;

/// Error response in the backend's `{"detail": ...}` shape.
pub struct Detail(pub StatusCode, pub String);

impl IntoResponse for Detail {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "detail": self.1 }))).into_response()
    }
}

pub fn app() -> Router {
    app_with(Backend::seeded())
}

pub fn app_with(backend: Backend) -> Router {
    let db: Db = Arc::new(RwLock::new(backend));
    let api = Router::new()
        .route("/health", get(health))
        .route("/articles", get(list_articles))
        .route("/articles/{id}", get(get_article))
        .route("/articles/by-slug/{site}/{slug}", get(article_by_slug))
        .route("/scraping/trigger", post(trigger_scrape))
        .route("/scraping/status", get(scrape_status))
        .route("/scraping/tasks/{task_id}", get(task_status))
        .route("/scheduler/status", get(scheduler_status))
        .route("/scheduler/trigger", post(trigger_scheduler))
        .with_state(db);
    Router::new().nest("/api/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock analytics backend listening");
    }
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn list_articles(
    State(db): State<Db>,
    Query(params): Query<ArticleParams>,
) -> Result<Json<serde_json::Value>, Detail> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20);
    if page == 0 || per_page == 0 {
        return Err(Detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "page and per_page must be positive".to_string(),
        ));
    }

    let backend = db.read().await;
    let search = params.search.as_deref().map(str::to_lowercase);
    let matching: Vec<&Article> = backend
        .articles
        .iter()
        .filter(|a| params.site.as_deref().map_or(true, |s| a.site == s))
        .filter(|a| {
            params
                .author
                .as_deref()
                .map_or(true, |au| a.author.as_deref() == Some(au))
        })
        .filter(|a| {
            search
                .as_deref()
                .map_or(true, |q| a.title.to_lowercase().contains(q))
        })
        .collect();

    let start = ((page - 1) * per_page) as usize;
    let items: Vec<&Article> = matching
        .iter()
        .skip(start)
        .take(per_page as usize)
        .copied()
        .collect();

    Ok(Json(json!({
        "articles": items,
        "total": matching.len(),
        "page": page,
        "per_page": per_page,
    })))
}

async fn get_article(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Article>, Detail> {
    let backend = db.read().await;
    backend
        .articles
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Detail(StatusCode::NOT_FOUND, "Article not found".to_string()))
}

async fn article_by_slug(
    State(db): State<Db>,
    Path((site, slug)): Path<(String, String)>,
) -> Result<Json<Article>, Detail> {
    let backend = db.read().await;
    backend
        .articles
        .iter()
        .find(|a| a.site == site && a.slug == slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| Detail(StatusCode::NOT_FOUND, "Article not found".to_string()))
}

async fn trigger_scrape(
    State(db): State<Db>,
    Json(input): Json<ScrapeRequest>,
) -> Result<Json<serde_json::Value>, Detail> {
    let mut backend = db.write().await;
    if backend.running_task.is_some() {
        return Err(Detail(
            StatusCode::CONFLICT,
            "A scraping job is already running".to_string(),
        ));
    }
    let task = Task {
        task_id: Uuid::new_v4().to_string(),
        status: "running".to_string(),
        site: input.site,
    };
    let task_id = task.task_id.clone();
    backend.running_task = Some(task_id.clone());
    backend.tasks.insert(task_id.clone(), task);
    Ok(Json(json!({ "task_id": task_id, "status": "started" })))
}

async fn scrape_status(State(db): State<Db>) -> Json<serde_json::Value> {
    let backend = db.read().await;
    Json(json!({
        "is_running": backend.running_task.is_some(),
        "current_task": backend.running_task,
    }))
}

async fn task_status(
    State(db): State<Db>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, Detail> {
    let backend = db.read().await;
    backend
        .tasks
        .get(&task_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Detail(StatusCode::NOT_FOUND, format!("Task {task_id} not found")))
}

async fn scheduler_status(State(db): State<Db>) -> Json<serde_json::Value> {
    let backend = db.read().await;
    Json(json!({
        "enabled": backend.scheduler_enabled,
        "running": false,
        "last_run": backend.scheduler_last_run,
        "jobs": [{ "id": "daily-scrape", "name": "Daily scrape" }],
    }))
}

async fn trigger_scheduler(State(db): State<Db>) -> Result<Json<serde_json::Value>, Detail> {
    let mut backend = db.write().await;
    if !backend.scheduler_enabled {
        return Err(Detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Scheduler unavailable".to_string(),
        ));
    }
    backend.scheduler_last_run = Some("2024-03-31T00:00:00Z".to_string());
    Ok(Json(json!({ "status": "started", "message": "Scheduler run queued" })))
}
