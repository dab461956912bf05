//! Namespace operations over a recording in-process transport.
//!
//! Each test scripts one response, runs an operation, and checks both the
//! parsed outcome and the exact request the client handed to the transport.

use std::sync::{Arc, Mutex};

use analytics_core::{
    AnalyticsClient, ArticleQuery, CacheTier, ClientConfig, FilterQuery, Granularity,
    HttpMethod, HttpRequest, HttpResponse, PageQuery, RankQuery, ScrapeRequest,
    SimilarityQuery, TimelineQuery, Transport, TransportError, TrendQuery, TriggerAck,
};
use rstest::rstest;
use serde_json::json;

const BASE_URL: &str = "http://analytics.test/api/v1";

/// Records every request and answers with a fixed response.
struct Recorder {
    requests: Mutex<Vec<HttpRequest>>,
    response: Result<HttpResponse, String>,
}

impl Recorder {
    fn responding(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::raw(status, &body.to_string())
    }

    fn raw(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }),
        })
    }

    fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Err(cause.to_string()),
        })
    }

    fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }

    fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for Recorder {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.response.clone().map_err(TransportError)
    }
}

fn client(transport: &Arc<Recorder>) -> AnalyticsClient {
    AnalyticsClient::with_shared_transport(ClientConfig::with_base_url(BASE_URL), transport.clone())
}

// ---------------------------------------------------------------------------
// Trigger scenarios
// ---------------------------------------------------------------------------

#[test]
fn scrape_trigger_resolves_to_acknowledgment() {
    let transport = Recorder::responding(200, json!({"task_id": "task-123", "status": "started"}));
    let ack = client(&transport)
        .scraping()
        .trigger(&ScrapeRequest::site("shega"))
        .unwrap();

    assert_eq!(
        ack,
        TriggerAck {
            task_id: Some("task-123".to_string()),
            status: "started".to_string(),
            message: None,
        }
    );

    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Post);
    assert!(req.url.contains("/scraping/trigger"));
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"site": "shega"}));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
}

#[test]
fn scheduler_trigger_failure_surfaces_detail() {
    let transport = Recorder::responding(500, json!({"detail": "Scheduler unavailable"}));
    let err = client(&transport).scheduler().trigger().unwrap_err();

    assert_eq!(err.message, "Scheduler unavailable");
    assert_eq!(err.status, Some(500));
    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, format!("{BASE_URL}/scheduler/trigger"));
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({}));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
}

#[test]
fn scrape_conflict_is_an_error() {
    let transport = Recorder::responding(409, json!({"detail": "A scraping job is already running"}));
    let err = client(&transport)
        .scraping()
        .trigger(&ScrapeRequest::default())
        .unwrap_err();
    assert_eq!(err.message, "A scraping job is already running");
    let body: serde_json::Value =
        serde_json::from_str(transport.last().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({}));
}

// ---------------------------------------------------------------------------
// Error normalization
// ---------------------------------------------------------------------------

#[test]
fn unparseable_error_body_uses_fallback_message() {
    let transport = Recorder::raw(500, "Internal Server Error");
    let err = client(&transport).health().check().unwrap_err();
    assert_eq!(err.message, "An error occurred");
    assert_eq!(err.status, Some(500));
}

#[test]
fn not_found_keeps_backend_detail() {
    let transport = Recorder::responding(404, json!({"detail": "Article not found"}));
    let err = client(&transport).articles().get(404).unwrap_err();
    assert_eq!(err.to_string(), "Article not found");
    assert!(err.is_not_found());
}

#[test]
fn transport_failure_has_no_status() {
    let transport = Recorder::failing("dns error: no such host");
    let err = client(&transport).sites().list().unwrap_err();
    assert_eq!(err.status, None);
    assert!(err.message.contains("no such host"));
}

#[test]
fn mismatched_success_body_is_an_error() {
    let transport = Recorder::responding(200, json!({"unexpected": true}));
    let err = client(&transport).health().check().unwrap_err();
    assert_eq!(err.status, Some(200));
    assert!(err.message.starts_with("Invalid response body"));
}

#[test]
fn no_retries_on_failure() {
    let transport = Recorder::responding(503, json!({"detail": "Service unavailable"}));
    let _ = client(&transport).health().check();
    assert_eq!(transport.count(), 1);
}

// ---------------------------------------------------------------------------
// Query and path construction
// ---------------------------------------------------------------------------

#[test]
fn article_list_omits_absent_filters() {
    let transport = Recorder::responding(
        200,
        json!({"articles": [], "total": 0, "page": 1, "per_page": 20}),
    );
    let query = ArticleQuery {
        page: Some(1),
        ..ArticleQuery::default()
    };
    let page = client(&transport).articles().list(&query).unwrap();
    assert_eq!(page.total, 0);

    let url = transport.last().url;
    assert_eq!(url, format!("{BASE_URL}/articles?page=1"));
    assert!(!url.contains("author="));
    assert!(!url.contains("site="));
}

#[test]
fn empty_query_has_no_question_mark() {
    let transport = Recorder::responding(200, json!({"items": [], "total": 0, "page": 1, "per_page": 20}));
    client(&transport).authors().list(&Default::default()).unwrap();
    let url = transport.last().url;
    assert_eq!(url, format!("{BASE_URL}/authors"));
    assert!(!url.contains('?'));
}

#[test]
fn article_by_slug_escapes_identifiers() {
    let transport = Recorder::responding(
        200,
        json!({"id": 9, "title": "T", "url": "https://shega.co/x", "site": "shega"}),
    );
    client(&transport)
        .articles()
        .by_slug("shega", "2024/03 funding")
        .unwrap();
    assert_eq!(
        transport.last().url,
        format!("{BASE_URL}/articles/by-slug/shega/2024%2F03%20funding")
    );
}

#[test]
fn author_articles_put_name_in_path_and_paging_in_query() {
    let transport = Recorder::responding(200, json!({"articles": [], "total": 0, "page": 2, "per_page": 5}));
    client(&transport)
        .authors()
        .articles("Abebe Kebede", &PageQuery::new(2, 5))
        .unwrap();
    assert_eq!(
        transport.last().url,
        format!("{BASE_URL}/authors/Abebe%20Kebede/articles?page=2&per_page=5")
    );
}

#[test]
fn keyword_trends_lead_with_keyword() {
    let transport = Recorder::responding(200, json!({"keyword": "coffee", "points": []}));
    client(&transport)
        .keywords()
        .trends("coffee", &TrendQuery::weeks(12))
        .unwrap();
    assert_eq!(
        transport.last().url,
        format!("{BASE_URL}/keywords/trends?keyword=coffee&weeks=12")
    );
}

#[test]
fn sentiment_timeline_encodes_granularity() {
    let transport = Recorder::responding(
        200,
        json!([{"date": "2024-03-01", "positive": 1, "neutral": 2, "negative": 0}]),
    );
    let points = client(&transport)
        .sentiment()
        .timeline(&TimelineQuery {
            granularity: Some(Granularity::Month),
            months: Some(6),
            ..TimelineQuery::default()
        })
        .unwrap();
    assert_eq!(points[0].distribution.neutral, 2);
    assert_eq!(
        transport.last().url,
        format!("{BASE_URL}/sentiment/timeline?granularity=month&months=6")
    );
}

// ---------------------------------------------------------------------------
// Cache tiers
// ---------------------------------------------------------------------------

type Call = fn(&AnalyticsClient);

#[rstest]
#[case::health(|c: &AnalyticsClient| { let _ = c.health().check(); }, CacheTier::Short)]
#[case::database(|c: &AnalyticsClient| { let _ = c.health().database(); }, CacheTier::Short)]
#[case::scheduler_status(|c: &AnalyticsClient| { let _ = c.scheduler().status(); }, CacheTier::Short)]
#[case::scraper_status(|c: &AnalyticsClient| { let _ = c.scraping().status(); }, CacheTier::Short)]
#[case::task_status(|c: &AnalyticsClient| { let _ = c.scraping().task_status("task-1"); }, CacheTier::Short)]
#[case::nlp_status(|c: &AnalyticsClient| { let _ = c.nlp().status(); }, CacheTier::Short)]
#[case::articles(|c: &AnalyticsClient| { let _ = c.articles().list(&ArticleQuery::default()); }, CacheTier::Default)]
#[case::articles_paged(|c: &AnalyticsClient| { let _ = c.articles().list(&ArticleQuery { page: Some(7), ..ArticleQuery::default() }); }, CacheTier::Default)]
#[case::article(|c: &AnalyticsClient| { let _ = c.articles().get(1); }, CacheTier::Default)]
#[case::article_stats(|c: &AnalyticsClient| { let _ = c.articles().stats(); }, CacheTier::Default)]
#[case::search(|c: &AnalyticsClient| { let _ = c.articles().search("coffee", None, None); }, CacheTier::Default)]
#[case::top_authors(|c: &AnalyticsClient| { let _ = c.authors().top(&RankQuery::limit(10)); }, CacheTier::Default)]
#[case::topic_trends(|c: &AnalyticsClient| { let _ = c.topics().trends(&TrendQuery::weeks(4)); }, CacheTier::Default)]
#[case::sentiment(|c: &AnalyticsClient| { let _ = c.sentiment().overview(&FilterQuery::site("shega")); }, CacheTier::Default)]
#[case::sentiment_by_site(|c: &AnalyticsClient| { let _ = c.sentiment().by_site(&FilterQuery::default()); }, CacheTier::Default)]
#[case::keywords(|c: &AnalyticsClient| { let _ = c.keywords().top(&RankQuery::default()); }, CacheTier::Default)]
#[case::frequency(|c: &AnalyticsClient| { let _ = c.publishing().frequency(&TimelineQuery::default()); }, CacheTier::Default)]
#[case::heatmap(|c: &AnalyticsClient| { let _ = c.publishing().heatmap(&TrendQuery::default()); }, CacheTier::Default)]
#[case::content_length(|c: &AnalyticsClient| { let _ = c.publishing().content_length(&FilterQuery::default()); }, CacheTier::Default)]
#[case::compare_sites(|c: &AnalyticsClient| { let _ = c.comparison().sites(&FilterQuery::default()); }, CacheTier::Default)]
#[case::compare_categories(|c: &AnalyticsClient| { let _ = c.comparison().categories(&FilterQuery::default()); }, CacheTier::Default)]
#[case::entities(|c: &AnalyticsClient| { let _ = c.nlp().entities(&Default::default()); }, CacheTier::Default)]
#[case::similar(|c: &AnalyticsClient| { let _ = c.nlp().similar(3, &SimilarityQuery::default()); }, CacheTier::Default)]
#[case::topic_articles(|c: &AnalyticsClient| { let _ = c.topics().articles("fintech", &PageQuery::default()); }, CacheTier::Default)]
#[case::topics(|c: &AnalyticsClient| { let _ = c.topics().list(&RankQuery::default()); }, CacheTier::Long)]
#[case::sites(|c: &AnalyticsClient| { let _ = c.sites().list(); }, CacheTier::Long)]
#[case::categories(|c: &AnalyticsClient| { let _ = c.categories().list(&FilterQuery::default()); }, CacheTier::Long)]
#[case::history(|c: &AnalyticsClient| { let _ = c.history().monthly(&Default::default()); }, CacheTier::Long)]
#[case::history_overview(|c: &AnalyticsClient| { let _ = c.history().overview(); }, CacheTier::Long)]
fn operations_request_their_tier(#[case] call: Call, #[case] tier: CacheTier) {
    let transport = Recorder::responding(200, json!({}));
    let client = client(&transport);
    call(&client);
    assert_eq!(
        transport.last().revalidate_seconds,
        client.config().seconds_for(tier)
    );
}

#[test]
fn tiers_follow_configuration() {
    let transport = Recorder::responding(200, json!({"status": "ok"}));
    let config = ClientConfig {
        short_cache_seconds: 5,
        ..ClientConfig::with_base_url(BASE_URL)
    };
    let client = AnalyticsClient::with_shared_transport(config, transport.clone());
    client.health().check().unwrap();
    assert_eq!(transport.last().revalidate_seconds, 5);
}
