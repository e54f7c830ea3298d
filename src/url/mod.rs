//! URL handling module for sitegraph
//!
//! This module provides root URL normalization, link resolution against a base
//! page, host identity checks, and the path arithmetic (cleaning, depth,
//! syntactic parent) the rest of the crawl is built on.

mod host;
mod normalize;
mod path;

// Re-export main functions
pub use host::same_host;
pub use normalize::{normalize_root, resolve_link};
pub use path::{clean_path, depth_of, last_segment, parent_of};
