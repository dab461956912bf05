use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::types::{DatabaseHealth, HealthStatus};

pub struct Health<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }
}

impl Health<'_> {
    pub fn check(&self) -> Result<HealthStatus> {
        self.client.get(endpoints::HEALTH, CacheTier::Short)
    }

    pub fn database(&self) -> Result<DatabaseHealth> {
        self.client.get(endpoints::HEALTH_DATABASE, CacheTier::Short)
    }
}
