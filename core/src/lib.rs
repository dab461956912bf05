//! Typed client for the news analytics API.
//!
//! # Overview
//! Every call the dashboard makes to the analytics backend goes through
//! `AnalyticsClient`: a namespace handle (`client.articles()`,
//! `client.scraping()`, ...) picks an endpoint, encodes its query and a cache
//! tier, and the client performs the round trip and normalizes the outcome
//! into `T` or a single `ApiError`.
//!
//! # Design
//! - `ClientConfig` is resolved once from the environment and is immutable.
//! - Requests and responses are plain data (`HttpRequest`/`HttpResponse`);
//!   a `Transport` does the I/O, so tests can substitute their own.
//! - Caching is time-based revalidation owned by the transport
//!   (`CachingTransport`); there is no invalidation API.
//! - No retries, no request deduplication. Failures surface immediately.
//!
//! ```no_run
//! use analytics_core::{AnalyticsClient, ArticleQuery};
//!
//! let client = AnalyticsClient::from_env();
//! let page = client.articles().list(&ArticleQuery {
//!     site: Some("shega".to_string()),
//!     page: Some(1),
//!     ..ArticleQuery::default()
//! })?;
//! println!("{} articles", page.total);
//! # Ok::<(), analytics_core::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod params;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{AnalyticsClient, RequestOptions};
pub use config::{resolve_config, CacheTier, ClientConfig};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use params::{
    ArticleQuery, AuthorQuery, ContentLength, EntityQuery, FilterQuery, Granularity, HistoryQuery,
    PageQuery, RankQuery, Sentiment, SimilarityQuery, TimelineQuery, TrendQuery,
};
pub use query::{encode_query, with_query, QueryParams, QueryValue};
pub use transport::{CachingTransport, UreqTransport};
pub use types::*;
