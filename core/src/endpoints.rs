//! Endpoint table: every path the client calls, relative to the base URL.
//!
//! Fixed paths are constants. Paths that embed identifiers are functions, and
//! each identifier is percent-encoded as a single path segment, so call sites
//! never concatenate raw identifiers into URLs.

use std::borrow::Cow;

use urlencoding::encode;

/// Percent-encode `value` as one path segment. `.` and `..` are unreserved
/// but would be collapsed as dot segments, so they are escaped in full.
fn segment(value: &str) -> Cow<'_, str> {
    match value {
        "." => Cow::Borrowed("%2E"),
        ".." => Cow::Borrowed("%2E%2E"),
        other => encode(other),
    }
}

pub const ARTICLES: &str = "/articles";
pub const ARTICLE_STATS: &str = "/articles/stats";

pub fn article(id: &str) -> String {
    format!("/articles/{}", segment(id))
}

pub fn article_by_slug(site: &str, slug: &str) -> String {
    format!("/articles/by-slug/{}/{}", segment(site), segment(slug))
}

pub const AUTHORS: &str = "/authors";
pub const TOP_AUTHORS: &str = "/authors/top";

pub fn author(name: &str) -> String {
    format!("/authors/{}", segment(name))
}

pub fn author_articles(name: &str) -> String {
    format!("/authors/{}/articles", segment(name))
}

pub const TOPICS: &str = "/topics";
pub const TOPIC_TRENDS: &str = "/topics/trends";

pub fn topic_articles(label: &str) -> String {
    format!("/topics/{}/articles", segment(label))
}

pub const SENTIMENT_OVERVIEW: &str = "/sentiment/overview";
pub const SENTIMENT_TIMELINE: &str = "/sentiment/timeline";
pub const SENTIMENT_BY_SITE: &str = "/sentiment/by-site";

pub const TOP_KEYWORDS: &str = "/keywords/top";
pub const KEYWORD_TRENDS: &str = "/keywords/trends";

pub const PUBLISHING_FREQUENCY: &str = "/publishing/frequency";
pub const PUBLISHING_HEATMAP: &str = "/publishing/heatmap";
pub const CONTENT_LENGTH: &str = "/publishing/content-length";

pub const SCRAPE_TRIGGER: &str = "/scraping/trigger";
pub const SCRAPE_STATUS: &str = "/scraping/status";

pub fn scrape_task(task_id: &str) -> String {
    format!("/scraping/tasks/{}", segment(task_id))
}

pub const SCHEDULER_STATUS: &str = "/scheduler/status";
pub const SCHEDULER_TRIGGER: &str = "/scheduler/trigger";

pub const COMPARE_SITES: &str = "/comparison/sites";
pub const COMPARE_CATEGORIES: &str = "/comparison/categories";

pub const NLP_ENTITIES: &str = "/nlp/entities";
pub const NLP_STATUS: &str = "/nlp/status";

pub fn similar_articles(article_id: &str) -> String {
    format!("/nlp/similar/{}", segment(article_id))
}

pub const HEALTH: &str = "/health";
pub const HEALTH_DATABASE: &str = "/health/database";

pub const SITES: &str = "/sites";
pub const CATEGORIES: &str = "/categories";

pub const HISTORY_MONTHLY: &str = "/history/monthly";
pub const HISTORY_OVERVIEW: &str = "/history/overview";
