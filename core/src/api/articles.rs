//! Article listing and lookup.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::ArticleQuery;
use crate::query::{with_query, QueryParams};
use crate::types::{Article, ArticleStats, Page};

pub struct Articles<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn articles(&self) -> Articles<'_> {
        Articles { client: self }
    }
}

impl Articles<'_> {
    /// Paginated, filtered article list.
    pub fn list(&self, query: &ArticleQuery) -> Result<Page<Article>> {
        let path = with_query(endpoints::ARTICLES, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn get(&self, id: i64) -> Result<Article> {
        self.client
            .get(&endpoints::article(&id.to_string()), CacheTier::Default)
    }

    pub fn by_slug(&self, site: &str, slug: &str) -> Result<Article> {
        self.client
            .get(&endpoints::article_by_slug(site, slug), CacheTier::Default)
    }

    /// Free-text search; shorthand for `list` with only `search` and paging.
    pub fn search(&self, text: &str, page: Option<u32>, per_page: Option<u32>) -> Result<Page<Article>> {
        let query = QueryParams::new()
            .set("search", text)
            .push("page", page)
            .push("per_page", per_page);
        self.client
            .get(&with_query(endpoints::ARTICLES, &query), CacheTier::Default)
    }

    pub fn stats(&self) -> Result<ArticleStats> {
        self.client.get(endpoints::ARTICLE_STATS, CacheTier::Default)
    }
}
