//! Scraper configuration.

use serde::{Deserialize, Serialize};

use crate::identity::{IdentityPool, DEFAULT_USER_AGENTS};
use crate::proxy::{ProxyConfig, ProxyMode, TransportSelector};
use crate::{ExtractorSelectors, Result, ScrapeError};

/// Run-wide settings for a [`Scraper`](crate::Scraper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Seconds to wait between consecutive pages.
    #[serde(default = "default_backoff")]
    pub backoff_secs: u64,
    /// Direct connection or proxy endpoint.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// What to do with an endpoint that does not parse.
    #[serde(default)]
    pub proxy_mode: ProxyMode,
    /// Extra attempts for a page answered with a non-200 status.
    #[serde(default)]
    pub retries: u32,
    /// User agents presented with each request.
    #[serde(default = "default_user_agents")]
    pub user_agents: Vec<String>,
    /// Result page layout.
    #[serde(default)]
    pub selectors: ExtractorSelectors,
}

fn default_backoff() -> u64 {
    10
}

fn default_user_agents() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            backoff_secs: default_backoff(),
            proxy: ProxyConfig::Direct,
            proxy_mode: ProxyMode::Lenient,
            retries: 0,
            user_agents: default_user_agents(),
            selectors: ExtractorSelectors::default(),
        }
    }
}

impl ScrapeConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScrapeError::ParseFailure(format!("Invalid scrape config: {}", e)))
    }

    /// Builds the identity pool, failing fast when it is empty.
    pub fn identity_pool(&self) -> Result<IdentityPool> {
        IdentityPool::new(self.user_agents.clone())
    }

    /// Builds the transport selector for this run.
    pub fn transport(&self) -> TransportSelector {
        TransportSelector::new(self.proxy.clone(), self.proxy_mode)
    }
}
