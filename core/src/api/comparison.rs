//! Side-by-side comparisons across sites.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::FilterQuery;
use crate::query::with_query;
use crate::types::{CategoryComparison, SiteComparison};

pub struct Comparison<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn comparison(&self) -> Comparison<'_> {
        Comparison { client: self }
    }
}

impl Comparison<'_> {
    pub fn sites(&self, filter: &FilterQuery) -> Result<Vec<SiteComparison>> {
        let path = with_query(endpoints::COMPARE_SITES, &filter.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn categories(&self, filter: &FilterQuery) -> Result<Vec<CategoryComparison>> {
        let path = with_query(endpoints::COMPARE_CATEGORIES, &filter.to_query());
        self.client.get(&path, CacheTier::Default)
    }
}
