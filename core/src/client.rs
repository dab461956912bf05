//! Request executor for the analytics API.
//!
//! # Design
//! `AnalyticsClient` holds the immutable configuration and a shared
//! `Transport`; it carries no other state between calls. A call is split
//! into `build_request` (path + options + cache tier into an `HttpRequest`)
//! and `parse_response` (an `HttpResponse` into `T` or an `ApiError`), with
//! the transport round trip in between. Both halves are public so each can be
//! tested without a network.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{resolve_config, CacheTier, ClientConfig};
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::transport::{CachingTransport, UreqTransport};

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// Per-call options: method, JSON body and extra headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::default()
        }
    }

    /// Attach `body`, serialized as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::serialization)?);
        Ok(self)
    }

    /// Add a header. Caller headers win over the defaults on a name clash.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Client for the analytics backend.
///
/// Cheap to clone; clones share the transport and therefore its cache.
#[derive(Clone)]
pub struct AnalyticsClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AnalyticsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnalyticsClient {
    /// Client over HTTP with time-based response caching.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, CachingTransport::new(UreqTransport::new()))
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(resolve_config().clone())
    }

    pub fn with_transport<T: Transport + 'static>(config: ClientConfig, transport: T) -> Self {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    pub fn with_shared_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Describe one call as plain data. `path` already carries its query.
    pub fn build_request(
        &self,
        path: &str,
        options: RequestOptions,
        tier: CacheTier,
    ) -> Result<HttpRequest> {
        let RequestOptions {
            method,
            body,
            headers: extra,
        } = options;

        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON.to_string())];
        for (name, value) in extra {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        let body = body
            .map(|value| serde_json::to_string(&value))
            .transpose()
            .map_err(ApiError::serialization)?;

        Ok(HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
            revalidate_seconds: self.config.seconds_for(tier),
        })
    }

    /// Turn a response into `T`, or into the normalized error.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T> {
        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.detail)
                .and_then(|detail| detail.as_str().map(str::to_string));
            return Err(ApiError::http(response.status, detail));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::invalid_body(response.status, e))
    }

    /// Build, execute and parse one call.
    pub fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        tier: CacheTier,
    ) -> Result<T> {
        let request = self.build_request(path, options, tier)?;
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, revalidate = request.revalidate_seconds, "request");

        let response = self.transport.execute(request).map_err(|e| {
            warn!(%method, %url, error = %e, "transport failure");
            ApiError::network(e)
        })?;

        self.parse_response(response).inspect_err(|e| {
            warn!(%method, %url, status = ?e.status, message = %e.message, "request failed");
        })
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str, tier: CacheTier) -> Result<T> {
        self.request(path, RequestOptions::get(), tier)
    }

    pub(crate) fn post<T, B>(&self, path: &str, body: Option<&B>, tier: CacheTier) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let options = match body {
            Some(body) => RequestOptions::post().json(body)?,
            None => RequestOptions::post(),
        };
        self.request(path, options, tier)
    }
}
