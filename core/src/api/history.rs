//! Historical aggregates. Past months do not change, so everything here uses
//! the long tier.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::HistoryQuery;
use crate::query::with_query;
use crate::types::{HistoryOverview, MonthlyCount};

pub struct History<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn history(&self) -> History<'_> {
        History { client: self }
    }
}

impl History<'_> {
    pub fn monthly(&self, query: &HistoryQuery) -> Result<Vec<MonthlyCount>> {
        let path = with_query(endpoints::HISTORY_MONTHLY, &query.to_query());
        self.client.get(&path, CacheTier::Long)
    }

    pub fn overview(&self) -> Result<HistoryOverview> {
        self.client.get(endpoints::HISTORY_OVERVIEW, CacheTier::Long)
    }
}
