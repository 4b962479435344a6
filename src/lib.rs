//! # serp-scrape
//!
//! A small search result scraper. A query is expanded into one URL per
//! result page, each page is fetched with a rotating user agent (optionally
//! through a proxy), and the result containers are parsed into ranked
//! records.
//!
//! - Sequential page fetching with a fixed pause between pages
//! - User-agent rotation from a configurable pool
//! - Direct or proxied transport
//! - Ranks that run continuously across pages
//!
//! ## Example
//!
//! ```rust,no_run
//! use serp_scrape::{QuerySpec, ScrapeConfig, Scraper};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scraper = Scraper::from_config(&ScrapeConfig::default())?;
//!
//!     let query = QuerySpec::new("golang").with_pages(2).with_results_per_page(30);
//!     let results = scraper.scrape(&query).await?;
//!
//!     for result in &results {
//!         println!("{}. {}: {}", result.rank, result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod extractor;
mod query;
mod result;
mod scrape;

pub mod delay;
pub mod fetcher;
pub mod fetcher_http;
pub mod identity;
pub mod proxy;

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use extractor::{ExtractorSelectors, ResultExtractor};
pub use query::{DomainTable, QuerySpec};
pub use result::SearchResult;
pub use scrape::Scraper;
