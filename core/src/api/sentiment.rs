use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{FilterQuery, TimelineQuery};
use crate::query::with_query;
use crate::types::{SentimentOverview, SentimentPoint, SiteSentiment};

pub struct SentimentApi<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn sentiment(&self) -> SentimentApi<'_> {
        SentimentApi { client: self }
    }
}

impl SentimentApi<'_> {
    pub fn overview(&self, filter: &FilterQuery) -> Result<SentimentOverview> {
        let path = with_query(endpoints::SENTIMENT_OVERVIEW, &filter.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn timeline(&self, query: &TimelineQuery) -> Result<Vec<SentimentPoint>> {
        let path = with_query(endpoints::SENTIMENT_TIMELINE, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn by_site(&self, filter: &FilterQuery) -> Result<Vec<SiteSentiment>> {
        let path = with_query(endpoints::SENTIMENT_BY_SITE, &filter.to_query());
        self.client.get(&path, CacheTier::Default)
    }
}
