//! Crawler module: fetching, parsing, and the BFS frontier
//!
//! The public entry points live here: [`crawl_site`] for the common case,
//! [`crawl_site_with_cancel`] when the caller wants to impose its own
//! wall-clock limit, and [`crawl`] as a depth-only convenience.

mod fetcher;
mod frontier;
mod parser;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use frontier::{CancelFlag, FrontierCrawler};
pub use parser::{parse_html, ParsedPage};

use crate::config::CrawlOptions;
use crate::graph::SiteGraph;
use crate::url::normalize_root;
use crate::{Result, SitegraphError};

/// Crawls a domain and returns its page hierarchy graph
///
/// # Arguments
///
/// * `domain` - Domain or URL, scheme optional (`example.com` works)
/// * `options` - Crawl options; depth is clamped to `[1, 5]`
///
/// # Errors
///
/// * [`SitegraphError::InvalidInput`] - the domain cannot be parsed
/// * [`SitegraphError::RootUnreachable`] - the root page's first fetch failed
///
/// Everything else degrades into the graph: failed pages become unreachable
/// nodes, missing ancestors are synthesized, and a site without links gets a
/// placeholder child.
pub async fn crawl_site(domain: &str, options: CrawlOptions) -> Result<SiteGraph> {
    crawl_site_with_cancel(domain, options, CancelFlag::new()).await
}

/// Like [`crawl_site`], but stoppable through a [`CancelFlag`]
///
/// A cancelled crawl is not an error: the pages registered so far are
/// reconciled and assembled into a partial (still connected) graph.
pub async fn crawl_site_with_cancel(
    domain: &str,
    options: CrawlOptions,
    cancel: CancelFlag,
) -> Result<SiteGraph> {
    let root = normalize_root(domain).map_err(|e| SitegraphError::InvalidInput {
        input: domain.to_string(),
        reason: e.to_string(),
    })?;

    // A client that cannot be built means the root can never be established,
    // so it surfaces through the same fatal variant as a failed root fetch.
    let client = build_http_client(&options.user_agent, options.request_timeout()).map_err(|e| {
        SitegraphError::RootUnreachable {
            url: root.to_string(),
            reason: format!("HTTP client could not be built: {}", e),
        }
    })?;
    FrontierCrawler::new(client, root, options, cancel).run().await
}

/// Convenience wrapper: crawl with default options at the given depth
pub async fn crawl(domain: &str, depth: usize) -> Result<SiteGraph> {
    crawl_site(domain, CrawlOptions::with_depth(depth)).await
}
