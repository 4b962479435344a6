//! HTTP-based page fetcher using reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use tracing::debug;

use crate::fetcher::PageFetcher;
use crate::identity::{IdentityPicker, IdentityPool, RandomPicker};
use crate::proxy::TransportSelector;
use crate::{Result, ScrapeError};

/// Fetches result pages with plain GET requests.
///
/// Each request gets a fresh client from the transport selector and a
/// user agent drawn from the identity pool.
pub struct HttpFetcher {
    transport: TransportSelector,
    identities: IdentityPool,
    picker: Arc<dyn IdentityPicker>,
}

impl HttpFetcher {
    /// Creates a fetcher with random identity selection.
    pub fn new(transport: TransportSelector, identities: IdentityPool) -> Self {
        Self {
            transport,
            identities,
            picker: Arc::new(RandomPicker),
        }
    }

    /// Replaces the identity picker.
    pub fn with_picker(mut self, picker: Arc<dyn IdentityPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Returns the identity pool.
    pub fn identities(&self) -> &IdentityPool {
        &self.identities
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(TransportSelector::direct(), IdentityPool::default())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let client = self.transport.client()?;
        let user_agent = self.identities.choose(self.picker.as_ref());
        debug!("GET {} as '{}'", url, user_agent);

        let response = client.get(url).header(USER_AGENT, user_agent).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::BannedOrBlocked(status));
        }

        let html = response.text().await?;
        Ok(html)
    }
}
