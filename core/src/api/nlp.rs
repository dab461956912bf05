//! NLP enrichment results: named entities and article similarity.

use crate::client::AnalyticsClient;
use crate::config::CacheTier;
use crate::endpoints;
use crate::error::Result;
use crate::params::{EntityQuery, SimilarityQuery};
use crate::query::with_query;
use crate::types::{Entity, NlpStatus, SimilarArticle};

pub struct Nlp<'a> {
    client: &'a AnalyticsClient,
}

impl AnalyticsClient {
    pub fn nlp(&self) -> Nlp<'_> {
        Nlp { client: self }
    }
}

impl Nlp<'_> {
    pub fn entities(&self, query: &EntityQuery) -> Result<Vec<Entity>> {
        let path = with_query(endpoints::NLP_ENTITIES, &query.to_query());
        self.client.get(&path, CacheTier::Default)
    }

    pub fn similar(&self, article_id: i64, query: &SimilarityQuery) -> Result<Vec<SimilarArticle>> {
        let path = with_query(
            &endpoints::similar_articles(&article_id.to_string()),
            &query.to_query(),
        );
        self.client.get(&path, CacheTier::Default)
    }

    /// Enrichment backlog; changes while the pipeline runs.
    pub fn status(&self) -> Result<NlpStatus> {
        self.client.get(endpoints::NLP_STATUS, CacheTier::Short)
    }
}
