//! Page registry: the accumulating, merge-only page map for one crawl
//!
//! Both discovery sources (sitemap seeding and BFS link traversal) funnel into
//! a single registry keyed by normalized path. Merges only ever *add*
//! information: a known title is never overwritten and a page that was
//! successfully fetched is never downgraded back to unreachable.

mod reconcile;

pub use reconcile::reconcile;

use std::collections::BTreeMap;
use url::Url;

/// One discovered or synthesized page
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    /// Normalized path; root is `"/"`, all others start with `/` and never
    /// end with `/`. Unique key within a crawl.
    pub path: String,

    /// Fully-qualified URL used to (re)fetch the page
    pub url: Url,

    /// Title from the page's `<title>` element, once fetched
    pub title: Option<String>,

    /// HTTP status of the last fetch attempt, if any was made
    pub status_code: Option<u16>,

    /// True until the page is successfully fetched; stays true for
    /// synthesized ancestors and failed fetches
    pub unreachable: bool,
}

/// Partial update applied through [`PageRegistry::upsert`]
///
/// Fields left `None` contribute nothing; `reached` marks the update as
/// coming from a successful fetch.
#[derive(Debug, Clone, Default)]
pub struct PagePatch {
    pub title: Option<String>,
    pub status_code: Option<u16>,
    pub reached: bool,
}

/// Merge-only key-value store of pages, keyed by normalized path
///
/// Backed by an ordered map so iteration (and therefore graph assembly) is
/// deterministic, with the root sorting first.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: BTreeMap<String, PageEntry>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pages.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&PageEntry> {
        self.pages.get(path)
    }

    /// Registers a path metadata-only (not yet fetched)
    ///
    /// A no-op if the path already exists. Returns true if the entry was
    /// inserted.
    pub fn register(&mut self, path: &str, url: &Url) -> bool {
        if self.pages.contains_key(path) {
            return false;
        }
        self.pages.insert(
            path.to_string(),
            PageEntry {
                path: path.to_string(),
                url: url.clone(),
                title: None,
                status_code: None,
                unreachable: true,
            },
        );
        true
    }

    /// Inserts or merges a page entry
    ///
    /// Merge rules (richer data always wins):
    /// - `title`: filled only if not yet known, so the first successful fetch
    ///   wins on conflicts
    /// - `status_code`: filled only if not yet known
    /// - reachability: a successful fetch clears `unreachable` permanently; a
    ///   failed one never sets it back
    pub fn upsert(&mut self, path: &str, url: &Url, patch: PagePatch) {
        match self.pages.get_mut(path) {
            Some(entry) => {
                if entry.title.is_none() {
                    entry.title = patch.title;
                }
                if entry.status_code.is_none() {
                    entry.status_code = patch.status_code;
                }
                if patch.reached {
                    entry.unreachable = false;
                }
            }
            None => {
                self.pages.insert(
                    path.to_string(),
                    PageEntry {
                        path: path.to_string(),
                        url: url.clone(),
                        title: patch.title,
                        status_code: patch.status_code,
                        unreachable: !patch.reached,
                    },
                );
            }
        }
    }

    /// Iterates entries in path order (root first)
    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.values()
    }

    /// Registered paths, in order
    pub fn paths(&self) -> Vec<String> {
        self.pages.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_register_inserts_once() {
        let mut reg = PageRegistry::new();
        assert!(reg.register("/about", &url("https://example.com/about")));
        assert!(!reg.register("/about", &url("https://example.com/about")));
        assert_eq!(reg.len(), 1);
        assert!(reg.get("/about").unwrap().unreachable);
    }

    #[test]
    fn test_upsert_enriches_seeded_entry() {
        let mut reg = PageRegistry::new();
        reg.register("/about", &url("https://example.com/about"));

        reg.upsert(
            "/about",
            &url("https://example.com/about"),
            PagePatch {
                title: Some("About Us".to_string()),
                status_code: Some(200),
                reached: true,
            },
        );

        let entry = reg.get("/about").unwrap();
        assert_eq!(entry.title.as_deref(), Some("About Us"));
        assert_eq!(entry.status_code, Some(200));
        assert!(!entry.unreachable);
    }

    #[test]
    fn test_known_title_is_never_overwritten() {
        let mut reg = PageRegistry::new();
        let u = url("https://example.com/about");
        reg.upsert(
            "/about",
            &u,
            PagePatch {
                title: Some("First".to_string()),
                status_code: Some(200),
                reached: true,
            },
        );
        reg.upsert(
            "/about",
            &u,
            PagePatch {
                title: Some("Second".to_string()),
                status_code: Some(301),
                reached: true,
            },
        );

        let entry = reg.get("/about").unwrap();
        assert_eq!(entry.title.as_deref(), Some("First"));
        assert_eq!(entry.status_code, Some(200));
    }

    #[test]
    fn test_reachable_is_never_downgraded() {
        let mut reg = PageRegistry::new();
        let u = url("https://example.com/about");
        reg.upsert(
            "/about",
            &u,
            PagePatch {
                title: Some("About".to_string()),
                status_code: Some(200),
                reached: true,
            },
        );

        // Later bare mention (e.g. a second sitemap loc) adds nothing.
        reg.upsert("/about", &u, PagePatch::default());

        let entry = reg.get("/about").unwrap();
        assert!(!entry.unreachable);
        assert_eq!(entry.title.as_deref(), Some("About"));
    }

    #[test]
    fn test_failed_fetch_records_status() {
        let mut reg = PageRegistry::new();
        let u = url("https://example.com/gone");
        reg.upsert(
            "/gone",
            &u,
            PagePatch {
                status_code: Some(404),
                ..Default::default()
            },
        );

        let entry = reg.get("/gone").unwrap();
        assert!(entry.unreachable);
        assert_eq!(entry.status_code, Some(404));
    }

    #[test]
    fn test_iteration_is_path_ordered_root_first() {
        let mut reg = PageRegistry::new();
        reg.register("/zebra", &url("https://example.com/zebra"));
        reg.register("/", &url("https://example.com/"));
        reg.register("/about", &url("https://example.com/about"));

        let paths: Vec<&str> = reg.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/zebra"]);
    }
}
