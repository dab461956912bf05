//! Author listings, profiles and rankings.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{AuthorQuery, PageQuery, RankQuery};
use crate::query::with_query;
use crate::types::{Article, Author, Page};

pub struct Authors<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn authors(&self) -> Authors<'_> {
        Authors { client: self }
    }
}

impl Authors<'_> {
    pub fn list(&self, query: &AuthorQuery) -> Result<Page<Author>> {
        let path = with_query(endpoints::AUTHORS, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    /// Profile of one author. `name` is sent as a single escaped path segment.
    pub fn get(&self, name: &str) -> Result<Author> {
        self.client.get(&endpoints::author(name), CacheTier::Default)
    }

    pub fn articles(&self, name: &str, page: &PageQuery) -> Result<Page<Article>> {
        let path = with_query(&endpoints::author_articles(name), &page.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn top(&self, query: &RankQuery) -> Result<Vec<Author>> {
        let path = with_query(endpoints::TOP_AUTHORS, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }
}
