//! Crawl configuration
//!
//! Options are a plain value passed explicitly into each crawl; there is no
//! global state. An outer layer (CLI, HTTP endpoint) can deserialize them
//! directly since every field has a default.

use serde::Deserialize;
use std::time::Duration;

/// Minimum accepted depth limit
pub const MIN_DEPTH: usize = 1;

/// Maximum accepted depth limit
pub const MAX_DEPTH: usize = 5;

/// Default depth limit when the caller does not supply one
pub const DEFAULT_DEPTH: usize = 3;

/// Shared page budget across sitemap seeding and link discovery
pub const DEFAULT_MAX_PAGES: usize = 80;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Options for a single crawl invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlOptions {
    /// Requested depth limit; clamped to `[MIN_DEPTH, MAX_DEPTH]` before use
    pub depth: usize,

    /// Maximum number of distinct pages the crawl may register
    pub max_pages: usize,

    /// Per-request timeout, seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("sitegraph/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlOptions {
    /// Options with a caller-supplied depth and defaults for everything else
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// The effective depth limit, clamped server-side to `[1, 5]`
    pub fn depth_limit(&self) -> usize {
        self.depth.clamp(MIN_DEPTH, MAX_DEPTH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CrawlOptions::default();
        assert_eq!(opts.depth, DEFAULT_DEPTH);
        assert_eq!(opts.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(opts.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_depth_clamping() {
        assert_eq!(CrawlOptions::with_depth(0).depth_limit(), 1);
        assert_eq!(CrawlOptions::with_depth(3).depth_limit(), 3);
        assert_eq!(CrawlOptions::with_depth(99).depth_limit(), 5);
    }

    #[test]
    fn test_timeout_floor() {
        let opts = CrawlOptions {
            timeout_secs: 0,
            ..CrawlOptions::default()
        };
        assert_eq!(opts.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: CrawlOptions = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
        assert_eq!(opts.depth, 2);
        assert_eq!(opts.max_pages, DEFAULT_MAX_PAGES);
    }
}
