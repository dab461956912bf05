use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{FilterQuery, TimelineQuery, TrendQuery};
use crate::query::with_query;
use crate::types::{ContentLengthBucket, HeatmapCell, PublishingPoint};

pub struct Publishing<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn publishing(&self) -> Publishing<'_> {
        Publishing { client: self }
    }
}

impl Publishing<'_> {
    pub fn frequency(&self, query: &TimelineQuery) -> Result<Vec<PublishingPoint>> {
        let path = with_query(endpoints::PUBLISHING_FREQUENCY, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    /// Weekday-by-hour publishing counts.
    pub fn heatmap(&self, query: &TrendQuery) -> Result<Vec<HeatmapCell>> {
        let path = with_query(endpoints::PUBLISHING_HEATMAP, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn content_length(&self, filter: &FilterQuery) -> Result<Vec<ContentLengthBucket>> {
        let path = with_query(endpoints::CONTENT_LENGTH, &filter.to_query());
        self.client.get(&path, CacheTier::Default)
    }
}
