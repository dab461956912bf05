//! Scrape jobs: trigger and poll.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::types::{ScrapeRequest, ScraperStatus, TaskStatus, TriggerAck};

pub struct Scraping<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn scraping(&self) -> Scraping<'_> {
        Scraping { client: self }
    }
}

impl Scraping<'_> {
    /// Start a scrape job. Fails with the backend's `detail` when a job is
    /// already running.
    pub fn trigger(&self, request: &ScrapeRequest) -> Result<TriggerAck> {
        self.client
            .post(endpoints::SCRAPE_TRIGGER, Some(request), CacheTier::Short)
    }

    pub fn task_status(&self, task_id: &str) -> Result<TaskStatus> {
        self.client
            .get(&endpoints::scrape_task(task_id), CacheTier::Short)
    }

    pub fn status(&self) -> Result<ScraperStatus> {
        self.client.get(endpoints::SCRAPE_STATUS, CacheTier::Short)
    }
}
