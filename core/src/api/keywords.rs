use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{RankQuery, TrendQuery};
use crate::query::{with_query, QueryParams};
use crate::types::{KeywordCount, KeywordTrend};

pub struct Keywords<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn keywords(&self) -> Keywords<'_> {
        Keywords { client: self }
    }
}

impl Keywords<'_> {
    pub fn top(&self, query: &RankQuery) -> Result<Vec<KeywordCount>> {
        let path = with_query(endpoints::TOP_KEYWORDS, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    /// Weekly counts for one keyword. The keyword leads the query string.
    pub fn trends(&self, keyword: &str, query: &TrendQuery) -> Result<KeywordTrend> {
        let params = QueryParams::new()
            .set("keyword", keyword)
            .push("weeks", query.weeks)
            .push("site", query.site.as_deref())
            .push("limit", query.limit);
        let path = with_query(endpoints::KEYWORD_TRENDS, &params);
        self.client.get(&path, CacheTier::Default)
    }
}
