//! Result page parsing.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, ScrapeError, SearchResult};

/// CSS selectors describing one result page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorSelectors {
    /// One element per search hit.
    pub container: String,
    /// Link inside a container; the first match's `href` is used.
    pub link: String,
    /// Title inside a container.
    pub heading: String,
    /// Snippet inside a container.
    pub snippet: String,
}

impl Default for ExtractorSelectors {
    fn default() -> Self {
        Self {
            container: "div.g".to_string(),
            link: "a".to_string(),
            heading: "h3.r".to_string(),
            snippet: "span.st".to_string(),
        }
    }
}

/// Turns result page HTML into ranked [`SearchResult`]s.
#[derive(Debug, Clone)]
pub struct ResultExtractor {
    container: Selector,
    link: Selector,
    heading: Selector,
    snippet: Selector,
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        ScrapeError::ParseFailure(format!("Failed to parse selector '{}': {:?}", css, e))
    })
}

fn collect_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
}

/// Empty, `#` and root-relative links stay on the results page.
fn is_external_link(link: &str) -> bool {
    !link.is_empty() && link != "#" && !link.starts_with('/')
}

impl ResultExtractor {
    /// Compiles the given selectors.
    pub fn new(selectors: &ExtractorSelectors) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&selectors.container)?,
            link: parse_selector(&selectors.link)?,
            heading: parse_selector(&selectors.heading)?,
            snippet: parse_selector(&selectors.snippet)?,
        })
    }

    /// Parses one page, numbering accepted hits from `rank + 1`.
    ///
    /// A page whose layout does not match yields no results rather than
    /// an error.
    pub fn extract(&self, html: &str, rank: u32) -> Result<Vec<SearchResult>> {
        let document = Html::parse_document(html);
        let mut results = Vec::new();
        let mut next_rank = rank;

        for element in document.select(&self.container) {
            let link = element
                .select(&self.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .trim();

            if !is_external_link(link) {
                continue;
            }

            next_rank = next_rank
                .checked_add(1)
                .ok_or_else(|| ScrapeError::InvalidQuery("result rank overflowed".into()))?;
            results.push(SearchResult::new(
                next_rank,
                link,
                collect_text(element, &self.heading),
                collect_text(element, &self.snippet),
            ));
        }

        debug!("Extracted {} results after rank {}", results.len(), rank);
        Ok(results)
    }
}
