//! Scrape orchestration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::delay::{Pause, TokioPause};
use crate::fetcher::PageFetcher;
use crate::fetcher_http::HttpFetcher;
use crate::{
    DomainTable, QuerySpec, Result, ResultExtractor, ScrapeConfig, ScrapeError, SearchResult,
};

/// Runs a paginated query page by page and collects the ranked results.
pub struct Scraper {
    domains: DomainTable,
    fetcher: Arc<dyn PageFetcher>,
    extractor: ResultExtractor,
    pause: Arc<dyn Pause>,
    backoff: Duration,
    retries: u32,
}

impl Scraper {
    /// Creates a scraper with the default domain table, a 10 second
    /// backoff and no retries.
    pub fn new(fetcher: Arc<dyn PageFetcher>, extractor: ResultExtractor) -> Self {
        Self {
            domains: DomainTable::default(),
            fetcher,
            extractor,
            pause: Arc::new(TokioPause),
            backoff: Duration::from_secs(10),
            retries: 0,
        }
    }

    /// Creates an HTTP-backed scraper from a configuration.
    ///
    /// Fails when the identity pool is empty or a selector does not compile.
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.transport(), config.identity_pool()?);
        let extractor = ResultExtractor::new(&config.selectors)?;
        Ok(Self::new(Arc::new(fetcher), extractor)
            .with_backoff(Duration::from_secs(config.backoff_secs))
            .with_retries(config.retries))
    }

    /// Sets the country domain table.
    pub fn with_domains(mut self, domains: DomainTable) -> Self {
        self.domains = domains;
        self
    }

    /// Sets how the run waits between pages.
    pub fn with_pause(mut self, pause: Arc<dyn Pause>) -> Self {
        self.pause = pause;
        self
    }

    /// Sets the interval between pages.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Sets how many extra attempts a blocked page gets.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Returns the domain table.
    pub fn domains(&self) -> &DomainTable {
        &self.domains
    }

    /// Returns the interval between pages.
    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Returns the retry budget per page.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Fetches and parses every page of the query.
    ///
    /// Pages are processed strictly in order with a pause between them.
    /// The first error aborts the run and nothing collected so far is
    /// returned.
    pub async fn scrape(&self, spec: &QuerySpec) -> Result<Vec<SearchResult>> {
        let urls = self.domains.build_urls(spec)?;
        info!("Scraping {} pages for '{}'", urls.len(), spec.term.trim());

        let mut results = Vec::new();
        let mut rank = 0u32;

        for (page, url) in urls.iter().enumerate() {
            if page > 0 {
                debug!("Waiting {:?} before page {}", self.backoff, page + 1);
                self.pause.pause(self.backoff).await;
            }

            let html = self.fetch_page(url).await?;
            let page_results = self.extractor.extract(&html, rank)?;
            debug!("Page {} yielded {} results", page + 1, page_results.len());

            rank = u32::try_from(page_results.len())
                .ok()
                .and_then(|added| rank.checked_add(added))
                .ok_or_else(|| ScrapeError::InvalidQuery("result rank overflowed".into()))?;
            results.extend(page_results);
        }

        info!("Collected {} results", results.len());
        Ok(results)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let mut attempts_left = self.retries;
        loop {
            match self.fetcher.fetch(url).await {
                Err(ScrapeError::BannedOrBlocked(status)) if attempts_left > 0 => {
                    attempts_left -= 1;
                    warn!(
                        "Blocked with {} on {}, retrying in {:?} ({} left)",
                        status, url, self.backoff, attempts_left
                    );
                    self.pause.pause(self.backoff).await;
                }
                other => return other,
            }
        }
    }
}
