//! Transport implementations.
//!
//! # Design
//! `UreqTransport` performs blocking HTTP with ureq and hands every response,
//! whatever its status, back as data. `CachingTransport` wraps any transport
//! and honours each request's `revalidate_seconds`: a successful GET is
//! reused until it is older than its window, then fetched again. There is no
//! invalidation API; staleness is bounded by the window alone.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Blocking HTTP transport backed by a shared ureq agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        // Non-2xx statuses must reach the client as responses, not errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            ..
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url.as_str()), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url.as_str()), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url.as_str()), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url.as_str()), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url.as_str()), &headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url.as_str()), &headers).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[derive(Debug, Clone)]
struct CachedResponse {
    expires_at: Instant,
    response: HttpResponse,
}

/// Time-based revalidating cache in front of another transport.
///
/// Only 2xx responses to GET requests are stored, keyed by URL. Everything
/// else passes straight through.
#[derive(Debug)]
pub struct CachingTransport<T> {
    inner: T,
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl<T: Transport> CachingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of stored responses, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fresh(&self, url: &str, now: Instant) -> Option<HttpResponse> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries
            .get(url)
            .filter(|cached| now < cached.expires_at)
            .map(|cached| cached.response.clone())
    }

    fn store(&self, url: String, response: &HttpResponse, ttl: Duration, now: Instant) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.retain(|_, cached| now < cached.expires_at);
        entries.insert(
            url,
            CachedResponse {
                expires_at: now + ttl,
                response: response.clone(),
            },
        );
    }
}

impl<T: Transport> Transport for CachingTransport<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if request.method != HttpMethod::Get || request.revalidate_seconds == 0 {
            return self.inner.execute(request);
        }

        let now = Instant::now();
        if let Some(response) = self.fresh(&request.url, now) {
            debug!(url = %request.url, "cache hit");
            return Ok(response);
        }

        let url = request.url.clone();
        let ttl = Duration::from_secs(request.revalidate_seconds);
        let response = self.inner.execute(request)?;
        if response.is_success() {
            self.store(url, &response, ttl, Instant::now());
        }
        Ok(response)
    }
}
