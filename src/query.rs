//! Query specification and result page URL construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, ScrapeError};

/// Base URL used for the `com` country code.
pub const GOOGLE_COM_BASE: &str = "http://www.google.com/search?q=";

/// A search query with its pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// The search terms.
    pub term: String,
    /// Key into the [`DomainTable`].
    pub country_code: String,
    /// Interface language passed through as `hl`.
    pub language_code: String,
    /// Number of result pages to fetch.
    pub page_count: u32,
    /// Results requested per page (`num`).
    pub results_per_page: u32,
}

impl QuerySpec {
    /// Creates a single-page query against `com` in English.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            country_code: "com".to_string(),
            language_code: "en".to_string(),
            page_count: 1,
            results_per_page: 10,
        }
    }

    /// Sets the country code.
    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Sets the language code.
    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Sets the number of pages.
    pub fn with_pages(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Sets the number of results per page.
    pub fn with_results_per_page(mut self, results_per_page: u32) -> Self {
        self.results_per_page = results_per_page;
        self
    }

    /// Search term with surrounding whitespace removed and spaces joined by `+`.
    ///
    /// Only spaces are rewritten; other characters go through untouched.
    pub fn normalized_term(&self) -> String {
        self.term.trim().replace(' ', "+")
    }
}

/// Country code to base query URL mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTable {
    domains: HashMap<String, String>,
}

impl DomainTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            domains: HashMap::new(),
        }
    }

    /// Adds or replaces the base URL for a country code.
    pub fn with_domain(mut self, country_code: impl Into<String>, base: impl Into<String>) -> Self {
        self.domains.insert(country_code.into(), base.into());
        self
    }

    /// Returns the base URL for a country code.
    pub fn base_for(&self, country_code: &str) -> Result<&str> {
        self.domains
            .get(country_code)
            .map(String::as_str)
            .ok_or_else(|| ScrapeError::UnsupportedCountry(country_code.to_string()))
    }

    /// Returns whether the country code is known.
    pub fn supports(&self, country_code: &str) -> bool {
        self.domains.contains_key(country_code)
    }

    /// Builds one URL per requested page, in page order.
    pub fn build_urls(&self, spec: &QuerySpec) -> Result<Vec<String>> {
        if spec.page_count == 0 {
            return Err(ScrapeError::InvalidQuery(
                "page count must be at least 1".into(),
            ));
        }
        if spec.results_per_page == 0 {
            return Err(ScrapeError::InvalidQuery(
                "results per page must be at least 1".into(),
            ));
        }

        let base = self.base_for(&spec.country_code)?;
        let term = spec.normalized_term();
        let count = u64::from(spec.results_per_page);

        let urls: Vec<String> = (0..u64::from(spec.page_count))
            .map(|page| {
                format!(
                    "{}{}&num={}&hl={}&start={}&filter=0",
                    base,
                    term,
                    count,
                    spec.language_code,
                    page * count
                )
            })
            .collect();

        debug!("Built {} result page URLs for '{}'", urls.len(), term);
        Ok(urls)
    }
}

impl Default for DomainTable {
    fn default() -> Self {
        Self::empty().with_domain("com", GOOGLE_COM_BASE)
    }
}
