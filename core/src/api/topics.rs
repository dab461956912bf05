use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{PageQuery, RankQuery, TrendQuery};
use crate::query::with_query;
use crate::types::{Article, Page, Topic, TopicTrend};

pub struct Topics<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn topics(&self) -> Topics<'_> {
        Topics { client: self }
    }
}

impl Topics<'_> {
    /// Topic clusters change only when the backend re-runs topic modelling.
    pub fn list(&self, query: &RankQuery) -> Result<Vec<Topic>> {
        let path = with_query(endpoints::TOPICS, &query.to_query());
        self.client.get(&path, CacheTier::Long)
    }

    pub fn trends(&self, query: &TrendQuery) -> Result<Vec<TopicTrend>> {
        let path = with_query(endpoints::TOPIC_TRENDS, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn articles(&self, label: &str, page: &PageQuery) -> Result<Page<Article>> {
        let path = with_query(&endpoints::topic_articles(label), &page.to_query());
        self.client.get(&path, CacheTier::Default)
    }
}
