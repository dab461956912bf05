use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::types::{SchedulerStatus, TriggerAck};

pub struct Scheduler<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn scheduler(&self) -> Scheduler<'_> {
        Scheduler { client: self }
    }
}

impl Scheduler<'_> {
    pub fn status(&self) -> Result<SchedulerStatus> {
        self.client.get(endpoints::SCHEDULER_STATUS, CacheTier::Short)
    }

    /// Run the scheduled pipeline now. The backend takes no options, so the
    /// body is an empty JSON object.
    pub fn trigger(&self) -> Result<TriggerAck> {
        self.client.post(
            endpoints::SCHEDULER_TRIGGER,
            Some(&serde_json::json!({})),
            CacheTier::Short,
        )
    }
}
