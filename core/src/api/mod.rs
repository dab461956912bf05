//! Domain namespaces.
//!
//! Each module groups the operations of one business capability behind a
//! borrowed handle obtained from `AnalyticsClient` (`client.articles()`,
//! `client.scheduler()`, ...). Handles only pick an endpoint, encode a query
//! and a cache tier, then delegate to the client; they add no error handling
//! of their own.

mod articles;
mod authors;
mod categories;
mod comparison;
mod health;
mod history;
mod keywords;
mod nlp;
mod publishing;
mod scheduler;
mod scraping;
mod sentiment;
mod sites;
mod topics;

pub use articles::Articles;
pub use authors::Authors;
pub use categories::Categories;
pub use comparison::Comparison;
pub use health::Health;
pub use history::History;
pub use keywords::Keywords;
pub use nlp::Nlp;
pub use publishing::Publishing;
pub use scheduler::Scheduler;
pub use scraping::Scraping;
pub use sentiment::SentimentApi;
pub use sites::Sites;
pub use topics::Topics;
