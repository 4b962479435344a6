//! Page fetcher abstraction for retrieving result pages.

use async_trait::async_trait;

use crate::Result;

/// Trait for fetching the HTML body of a result page.
///
/// Implementations validate the response before returning it: a body is
/// only handed back for a successful request. All configuration (identity
/// pool, proxy) is set at construction time.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the HTML content of the given URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}
