//! Response DTOs for the analytics API.
//!
//! # Design
//! Responses are deserialized into these types at the boundary, so a body of
//! the wrong shape surfaces as an `ApiError` instead of reaching callers.
//! Fields the backend may leave out are `Option` or `#[serde(default)]`;
//! unknown fields are ignored, so additive backend changes stay compatible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Paginated envelope. The backend names the list `items` on most endpoints
/// and `articles` on the article listings. When a body carries both, `items`
/// wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    try_from = "PageBody<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct PageBody<T> {
    items: Option<Vec<T>>,
    articles: Option<Vec<T>>,
    total: u64,
    page: u32,
    per_page: u32,
}

impl<T> TryFrom<PageBody<T>> for Page<T> {
    type Error = String;

    fn try_from(body: PageBody<T>) -> Result<Self, Self::Error> {
        let items = body
            .items
            .or(body.articles)
            .ok_or_else(|| "missing field `items`".to_string())?;
        Ok(Self {
            items,
            total: body.total,
            page: body.page,
            per_page: body.per_page,
        })
    }
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub site: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub content_length: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub topic_label: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArticleStats {
    pub total_articles: u64,
    pub total_sites: u64,
    pub total_authors: u64,
    pub articles_today: u64,
    pub articles_this_week: u64,
    pub avg_word_count: Option<f64>,
    pub latest_published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub article_count: u64,
    #[serde(default)]
    pub first_published_at: Option<String>,
    #[serde(default)]
    pub last_published_at: Option<String>,
    #[serde(default)]
    pub avg_word_count: Option<f64>,
    #[serde(default)]
    pub top_categories: Vec<String>,
    #[serde(default)]
    pub sentiment: Option<SentimentDistribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub label: String,
    #[serde(default)]
    pub article_count: u64,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One bucket of a time series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub period: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicTrend {
    pub label: String,
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentDistribution {
    pub fn total(&self) -> u64 {
        self.positive
            .saturating_add(self.neutral)
            .saturating_add(self.negative)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SentimentOverview {
    pub distribution: SentimentDistribution,
    pub average_score: Option<f64>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentPoint {
    pub date: String,
    #[serde(flatten)]
    pub distribution: SentimentDistribution,
    #[serde(default)]
    pub average_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSentiment {
    pub site: String,
    #[serde(flatten)]
    pub distribution: SentimentDistribution,
    #[serde(default)]
    pub average_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordTrend {
    pub keyword: String,
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishingPoint {
    pub period: String,
    pub count: u64,
    #[serde(default)]
    pub site: Option<String>,
}

/// Article count for one weekday/hour slot. `day_of_week` is 0 for Monday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentLengthBucket {
    pub bucket: String,
    pub count: u64,
}

/// Body of a scrape trigger. An absent site scrapes every configured site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl ScrapeRequest {
    pub fn site(site: impl Into<String>) -> Self {
        Self {
            site: Some(site.into()),
            max_pages: None,
        }
    }
}

/// Acknowledgment returned by the trigger endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: String,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TaskStatus {
    /// Whether the task has stopped running, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_str(),
            "completed" | "success" | "failed" | "failure" | "error"
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScraperStatus {
    pub is_running: bool,
    pub current_task: Option<String>,
    pub last_run: Option<String>,
    pub last_article_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledJob {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub next_run: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulerStatus {
    pub enabled: bool,
    pub running: bool,
    pub next_run: Option<String>,
    pub last_run: Option<String>,
    pub jobs: Vec<ScheduledJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteComparison {
    pub site: String,
    #[serde(default)]
    pub article_count: u64,
    #[serde(default)]
    pub author_count: u64,
    #[serde(default)]
    pub avg_word_count: Option<f64>,
    #[serde(default)]
    pub avg_sentiment: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryComparison {
    pub category: String,
    /// Article counts keyed by site.
    #[serde(default)]
    pub by_site: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub entity_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub site: Option<String>,
    pub similarity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NlpStatus {
    pub processed: u64,
    pub pending: u64,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseHealth {
    pub status: String,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub article_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub article_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub article_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
    #[serde(default)]
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryOverview {
    pub first_published_at: Option<String>,
    pub last_published_at: Option<String>,
    pub total_months: u32,
    pub total_articles: u64,
}
