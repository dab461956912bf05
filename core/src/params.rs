//! Filter parameters for the namespace operations.
//!
//! Every field is optional. `to_query` lists fields in declaration order,
//! which is also their order in the encoded query string. Identifiers that
//! belong in the path are arguments of the operation, never fields here.

use std::fmt;

use crate::query::{QueryParams, QueryValue};

/// Bucket width for time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Granularity> for QueryValue {
    fn from(value: Granularity) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl From<Sentiment> for QueryValue {
    fn from(value: Sentiment) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

/// Article length class as bucketed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl ContentLength {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }
}

impl From<ContentLength> for QueryValue {
    fn from(value: ContentLength) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push("per_page", self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub site: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub topic_label: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub content_length: Option<ContentLength>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

impl ArticleQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("site", self.site.as_deref())
            .push("author", self.author.as_deref())
            .push("category", self.category.as_deref())
            .push("keyword", self.keyword.as_deref())
            .push("topic_label", self.topic_label.as_deref())
            .push("sentiment", self.sentiment)
            .push("content_length", self.content_length)
            .push("start_date", self.start_date.as_deref())
            .push("end_date", self.end_date.as_deref())
            .push("search", self.search.as_deref())
            .push("sort_by", self.sort_by.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub site: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

impl AuthorQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("site", self.site.as_deref())
            .push("search", self.search.as_deref())
            .push("sort_by", self.sort_by.as_deref())
    }
}

/// Ranking queries: top authors, top keywords, topic lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankQuery {
    pub limit: Option<u32>,
    pub site: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl RankQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("limit", self.limit)
            .push("site", self.site.as_deref())
            .push("category", self.category.as_deref())
            .push("start_date", self.start_date.as_deref())
            .push("end_date", self.end_date.as_deref())
    }
}

/// Week-windowed trend queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendQuery {
    pub weeks: Option<u32>,
    pub site: Option<String>,
    pub limit: Option<u32>,
}

impl TrendQuery {
    pub fn weeks(weeks: u32) -> Self {
        Self {
            weeks: Some(weeks),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("weeks", self.weeks)
            .push("site", self.site.as_deref())
            .push("limit", self.limit)
    }
}

/// Site/category/date-range filter shared by the aggregate endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub site: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterQuery {
    pub fn site(site: impl Into<String>) -> Self {
        Self {
            site: Some(site.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("site", self.site.as_deref())
            .push("category", self.category.as_deref())
            .push("start_date", self.start_date.as_deref())
            .push("end_date", self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineQuery {
    pub granularity: Option<Granularity>,
    pub days: Option<u32>,
    pub months: Option<u32>,
    pub site: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TimelineQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("granularity", self.granularity)
            .push("days", self.days)
            .push("months", self.months)
            .push("site", self.site.as_deref())
            .push("start_date", self.start_date.as_deref())
            .push("end_date", self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityQuery {
    pub entity_type: Option<String>,
    pub limit: Option<u32>,
    pub site: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EntityQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("entity_type", self.entity_type.as_deref())
            .push("limit", self.limit)
            .push("site", self.site.as_deref())
            .push("start_date", self.start_date.as_deref())
            .push("end_date", self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityQuery {
    pub threshold: Option<f64>,
    pub limit: Option<u32>,
}

impl SimilarityQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("threshold", self.threshold)
            .push("limit", self.limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub months: Option<u32>,
    pub site: Option<String>,
}

impl HistoryQuery {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("months", self.months)
            .push("site", self.site.as_deref())
    }
}
