//! serp-scrape CLI - scrape ranked search results for a query.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use serp_scrape::{
    proxy::{ProxyConfig, ProxyMode},
    QuerySpec, ScrapeConfig, Scraper, SearchResult,
};

/// serp-scrape - paginated search result scraper
#[derive(Parser)]
#[command(name = "serp-scrape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// Country code selecting the search domain
    #[arg(short, long, default_value = "com")]
    country: String,

    /// Interface language code
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Number of result pages to fetch
    #[arg(short, long, default_value = "1")]
    pages: u32,

    /// Results per page
    #[arg(short = 'n', long, default_value = "30")]
    count: u32,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080)
    #[arg(long)]
    proxy: Option<String>,

    /// Fail instead of connecting directly when the proxy URL is malformed
    #[arg(long)]
    strict_proxy: bool,

    /// Seconds to wait between pages
    #[arg(short, long)]
    backoff: Option<u64>,

    /// Extra attempts for a page answered with a non-200 status
    #[arg(short, long)]
    retries: Option<u32>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for results
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose, &directives))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;
    let scraper = Scraper::from_config(&config)?;

    let query = QuerySpec::new(&cli.query)
        .with_country(&cli.country)
        .with_language(&cli.language)
        .with_pages(cli.pages)
        .with_results_per_page(cli.count);

    let results = scraper.scrape(&query).await?;
    print_results(&cli, &results)
}

/// `RUST_LOG`-style directives on top of a WARN (or DEBUG when verbose) default.
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives)
}

fn load_config(cli: &Cli) -> Result<ScrapeConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ScrapeConfig::from_json(&json)?
        }
        None => ScrapeConfig::default(),
    };

    if let Some(proxy) = &cli.proxy {
        config.proxy = ProxyConfig::endpoint(proxy);
    }
    if cli.strict_proxy {
        config.proxy_mode = ProxyMode::Strict;
    }
    if let Some(backoff) = cli.backoff {
        config.backoff_secs = backoff;
    }
    if let Some(retries) = cli.retries {
        config.retries = retries;
    }

    Ok(config)
}

fn print_results(cli: &Cli, results: &[SearchResult]) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            println!(
                "\nSearch results for \"{}\" ({} results):\n",
                cli.query,
                results.len()
            );

            for result in results {
                println!("{}. {}", result.rank, result.title);
                println!("   URL: {}", result.url);
                if !result.description.is_empty() {
                    let description = if result.description.chars().count() > 150 {
                        format!("{}...", result.description.chars().take(150).collect::<String>())
                    } else {
                        result.description.clone()
                    };
                    println!("   {}", description);
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
        OutputFormat::Compact => {
            for result in results {
                println!("{}\t{}\t{}", result.rank, result.title, result.url);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        let filter = log_filter(false, "").to_string();
        assert!(filter.contains("warn"), "{}", filter);
        assert!(!filter.contains("debug"), "{}", filter);
    }

    #[test]
    fn test_log_filter_verbose_is_debug() {
        let filter = log_filter(true, "").to_string();
        assert!(filter.contains("debug"), "{}", filter);
    }

    #[test]
    fn test_log_filter_keeps_env_directives() {
        let filter = log_filter(false, "serp_scrape=trace");
        assert!(filter.to_string().contains("serp_scrape=trace"));
    }

    #[test]
    fn test_load_config_flags_override() {
        let cli = Cli::parse_from([
            "serp-scrape",
            "golang",
            "--proxy",
            "ftp://127.0.0.1:1",
            "--strict-proxy",
            "--backoff",
            "2",
            "--retries",
            "1",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.proxy, ProxyConfig::endpoint("ftp://127.0.0.1:1"));
        assert_eq!(config.proxy_mode, ProxyMode::Strict);
        assert_eq!(config.backoff_secs, 2);
        assert_eq!(config.retries, 1);
    }
}
