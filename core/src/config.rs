//! Process-wide client configuration.
//!
//! # Design
//! Configuration is resolved once from the environment and never changes
//! afterwards. `from_lookup` takes the variable source as a closure so the
//! resolution rules can be tested without touching the real environment.
//! Resolution never fails: anything missing or unusable falls back to the
//! built-in defaults.

use std::sync::OnceLock;

use tracing::warn;

pub const BASE_URL_VAR: &str = "ANALYTICS_API_URL";
pub const SHORT_CACHE_VAR: &str = "ANALYTICS_CACHE_SHORT_SECONDS";
pub const DEFAULT_CACHE_VAR: &str = "ANALYTICS_CACHE_DEFAULT_SECONDS";
pub const LONG_CACHE_VAR: &str = "ANALYTICS_CACHE_LONG_SECONDS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_SHORT_SECONDS: u64 = 60;
pub const DEFAULT_CACHE_SECONDS: u64 = 300;
pub const DEFAULT_LONG_SECONDS: u64 = 3600;

/// Revalidation window applied to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTier {
    /// Status, health and task polling.
    Short,
    /// Most analytics reads.
    Default,
    /// Slow-changing aggregates.
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_cache_seconds: u64,
    pub short_cache_seconds: u64,
    pub long_cache_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_cache_seconds: DEFAULT_CACHE_SECONDS,
            short_cache_seconds: DEFAULT_SHORT_SECONDS,
            long_cache_seconds: DEFAULT_LONG_SECONDS,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with default cache tiers.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Resolve configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| normalize_base_url(&v))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let short = seconds_var(&lookup, SHORT_CACHE_VAR, DEFAULT_SHORT_SECONDS);
        let standard = seconds_var(&lookup, DEFAULT_CACHE_VAR, DEFAULT_CACHE_SECONDS);
        let long = seconds_var(&lookup, LONG_CACHE_VAR, DEFAULT_LONG_SECONDS);

        if short < standard && standard < long {
            Self {
                base_url,
                default_cache_seconds: standard,
                short_cache_seconds: short,
                long_cache_seconds: long,
            }
        } else {
            warn!(short, standard, long, "cache tiers out of order, using defaults");
            Self {
                base_url,
                ..Self::default()
            }
        }
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn seconds_for(&self, tier: CacheTier) -> u64 {
        match tier {
            CacheTier::Short => self.short_cache_seconds,
            CacheTier::Default => self.default_cache_seconds,
            CacheTier::Long => self.long_cache_seconds,
        }
    }
}

/// Configuration for the lifetime of the process, read from the environment
/// on first use.
pub fn resolve_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_env)
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn seconds_var<F>(lookup: &F, key: &str, fallback: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return fallback;
    };
    match raw.trim().parse::<u64>() {
        Ok(value) => value,
        Err(e) => {
            warn!(key, value = %raw, error = %e, "invalid cache seconds, using default");
            fallback
        }
    }
}
