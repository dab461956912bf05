use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::FilterQuery;
use crate::query::with_query;
use crate::types::Category;

pub struct Categories<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }
}

impl Categories<'_> {
    pub fn list(&self, filter: &FilterQuery) -> Result<Vec<Category>> {
        let path = with_query(endpoints::CATEGORIES, &filter.to_query());
        self.client.get(&path, CacheTier::Long)
    }
}
