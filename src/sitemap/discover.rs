//! Well-known sitemap location probing

use crate::sitemap::extract_locs;
use crate::url::{clean_path, depth_of, same_host};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Well-known sitemap locations, tried in order
pub const SITEMAP_CANDIDATES: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Discovers seed URLs for a crawl from the site's sitemap, if it has one
///
/// Tries each candidate path in order; the first candidate that answers with a
/// 2xx response is parsed for `<loc>` entries and further candidates are not
/// tried. Entries are filtered to the root's host (ignoring `www.`) and to
/// paths within the depth limit — the crawl would discard deeper seeds
/// unfetched anyway, so registering them would only waste budget — then
/// deduplicated by normalized path and truncated to `budget`.
///
/// Discovery is best-effort: fetch failures, error statuses, and unparseable
/// bodies are logged at debug level and skipped. An empty result is normal.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `root` - The normalized root URL of the crawl
/// * `budget` - Maximum number of seeds to return (the remaining page budget)
/// * `depth_limit` - Effective depth limit of the crawl
pub async fn discover_seeds(
    client: &Client,
    root: &Url,
    budget: usize,
    depth_limit: usize,
) -> Vec<Url> {
    if budget == 0 {
        return Vec::new();
    }

    let root_host = match root.host_str() {
        Some(h) => h.to_string(),
        None => return Vec::new(),
    };

    for candidate in SITEMAP_CANDIDATES {
        let sitemap_url = match root.join(candidate) {
            Ok(u) => u,
            Err(_) => continue,
        };

        tracing::debug!("trying sitemap candidate {}", sitemap_url);

        let response = match client.get(sitemap_url.as_str()).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("sitemap candidate {} failed: {}", sitemap_url, e);
                continue;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                "sitemap candidate {} returned {}",
                sitemap_url,
                response.status()
            );
            continue;
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("sitemap candidate {} body error: {}", sitemap_url, e);
                continue;
            }
        };

        let seeds = filter_entries(&extract_locs(&body), &root_host, budget, depth_limit);
        tracing::info!(
            "sitemap {} yielded {} same-host seeds",
            sitemap_url,
            seeds.len()
        );
        // First successful candidate wins, even if it yielded nothing.
        return seeds;
    }

    tracing::debug!("no sitemap found for {}", root_host);
    Vec::new()
}

/// Filters raw loc entries to parseable, same-host, within-depth URLs,
/// unique by path
fn filter_entries(
    locs: &[String],
    root_host: &str,
    budget: usize,
    depth_limit: usize,
) -> Vec<Url> {
    let mut seen_paths: HashSet<String> = HashSet::new();
    let mut seeds = Vec::new();

    for loc in locs {
        if seeds.len() >= budget {
            break;
        }

        let url = match Url::parse(loc) {
            Ok(u) => u,
            Err(_) => continue,
        };

        let host = match url.host_str() {
            Some(h) => h,
            None => continue,
        };

        if !same_host(host, root_host) {
            continue;
        }

        let path = clean_path(&url);
        if depth_of(&path) > depth_limit {
            continue;
        }

        if seen_paths.insert(path) {
            seeds.push(url);
        }
    }

    seeds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_keeps_same_host() {
        let entries = locs(&[
            "https://example.com/a",
            "https://www.example.com/b",
            "https://other.com/c",
        ]);
        let seeds = filter_entries(&entries, "example.com", 10, 5);
        assert_eq!(seeds.len(), 2);
    }

    #[test]
    fn test_filter_drops_over_limit_depths() {
        let entries = locs(&[
            "https://example.com/shallow",
            "https://example.com/a/b/c",
            "https://example.com/x/y",
        ]);
        let seeds = filter_entries(&entries, "example.com", 10, 2);
        let paths: Vec<&str> = seeds.iter().map(|u| u.path()).collect();
        assert_eq!(paths, vec!["/shallow", "/x/y"]);
    }

    #[test]
    fn test_filter_dedupes_by_path() {
        let entries = locs(&[
            "https://example.com/a",
            "https://example.com/a/",
            "https://example.com/a?utm=x",
        ]);
        // Trailing slash dedupes; a differing query still maps to the same path.
        let seeds = filter_entries(&entries, "example.com", 10, 5);
        assert_eq!(seeds.len(), 1);
    }

    #[test]
    fn test_filter_truncates_to_budget() {
        let entries = locs(&[
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/c",
        ]);
        let seeds = filter_entries(&entries, "example.com", 2, 5);
        assert_eq!(seeds.len(), 2);
    }

    #[test]
    fn test_filter_skips_unparseable() {
        let entries = locs(&["not a url", "https://example.com/ok"]);
        let seeds = filter_entries(&entries, "example.com", 10, 5);
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].path(), "/ok");
    }

    #[test]
    fn test_zero_budget_yields_nothing() {
        let entries = locs(&["https://example.com/a"]);
        assert!(filter_entries(&entries, "example.com", 0, 5).is_empty());
    }
}
