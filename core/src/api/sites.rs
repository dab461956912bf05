use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::types::Site;

pub struct Sites<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn sites(&self) -> Sites<'_> {
        Sites { client: self }
    }
}

impl Sites<'_> {
    /// Configured news sites with their article counts.
    pub fn list(&self) -> Result<Vec<Site>> {
        self.client.get(endpoints::SITES, CacheTier::Long)
    }
}
