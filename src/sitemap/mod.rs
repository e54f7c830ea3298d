//! Sitemap discovery module
//!
//! Best-effort seeding of the crawl from well-known sitemap locations. Nothing
//! in here can fail the crawl: a site with no sitemap, an unreachable sitemap,
//! or malformed XML all just mean fewer (or zero) seeds.

mod discover;
mod parser;

pub use discover::{discover_seeds, SITEMAP_CANDIDATES};
pub use parser::extract_locs;
