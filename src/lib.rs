//! Sitegraph: a bounded website hierarchy mapper
//!
//! This crate crawls a single domain breadth-first, merges the pages it finds
//! with sitemap-declared pages, and produces a connected, path-derived tree of
//! nodes and edges suitable for rendering or persisting elsewhere.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod registry;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for sitegraph operations
///
/// Only `InvalidInput` and `RootUnreachable` escape a crawl; every other
/// failure mode degrades into the output graph (unreachable nodes, skipped
/// links, skipped sitemap candidates).
#[derive(Debug, Error)]
pub enum SitegraphError {
    #[error("invalid domain input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("root page unreachable at {url}: {reason}")]
    RootUnreachable { url: String, reason: String },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for sitegraph operations
pub type Result<T> = std::result::Result<T, SitegraphError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlOptions;
pub use crawler::{crawl, crawl_site, crawl_site_with_cancel, CancelFlag};
pub use graph::{Edge, Node, SiteGraph};
pub use registry::{PageEntry, PageRegistry};
pub use url::{clean_path, depth_of, normalize_root, parent_of, resolve_link, same_host};
