//! Hierarchy reconciliation
//!
//! The crawl can discover a page at depth N without its syntactic parent ever
//! having been fetched (a sitemap entry for `/a/b/c` on a site where nothing
//! links to `/a`, say). Reconciliation walks every registered path back to the
//! root and synthesizes unreachable placeholder entries for the gaps, so the
//! assembler can always produce a connected rooted tree.

use crate::registry::{PagePatch, PageRegistry};
use crate::url::{last_segment, parent_of};
use url::Url;

/// Closes every ancestor chain in the registry
///
/// For each registered path, walks `parent_of` until reaching the root or an
/// already-registered ancestor; each missing intermediate is synthesized as an
/// unreachable entry with a title derived from its last path segment (the
/// hostname for the root) and no status code.
///
/// # Arguments
///
/// * `registry` - The page registry to reconcile in place
/// * `root` - The crawl's root URL, used to build placeholder fetch URLs
/// * `hostname` - The working hostname, used as the root's derived title
pub fn reconcile(registry: &mut PageRegistry, root: &Url, hostname: &str) {
    // The root must exist even if the crawl never registered it.
    if !registry.contains("/") {
        registry.upsert(
            "/",
            root,
            PagePatch {
                title: Some(hostname.to_string()),
                ..Default::default()
            },
        );
    }

    let mut synthesized = 0usize;
    for path in registry.paths() {
        let mut current = path;
        while let Some(parent) = parent_of(&current) {
            if registry.contains(&parent) {
                break;
            }

            let placeholder_url = match root.join(&parent) {
                Ok(u) => u,
                Err(_) => root.clone(),
            };
            let title = last_segment(&parent)
                .unwrap_or(hostname)
                .to_string();

            registry.upsert(
                &parent,
                &placeholder_url,
                PagePatch {
                    title: Some(title),
                    ..Default::default()
                },
            );
            synthesized += 1;
            current = parent;
        }
    }

    if synthesized > 0 {
        tracing::debug!("synthesized {} missing ancestor pages", synthesized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_fills_missing_intermediates() {
        let mut reg = PageRegistry::new();
        reg.register("/", &root());
        reg.register("/a/b/c", &Url::parse("https://example.com/a/b/c").unwrap());

        reconcile(&mut reg, &root(), "example.com");

        assert!(reg.contains("/a"));
        assert!(reg.contains("/a/b"));
        assert_eq!(reg.len(), 4);

        let a = reg.get("/a").unwrap();
        assert!(a.unreachable);
        assert_eq!(a.title.as_deref(), Some("a"));
        assert_eq!(a.status_code, None);
        assert_eq!(a.url.as_str(), "https://example.com/a");
    }

    #[test]
    fn test_synthesizes_root_when_absent() {
        let mut reg = PageRegistry::new();
        reg.register("/about", &Url::parse("https://example.com/about").unwrap());

        reconcile(&mut reg, &root(), "example.com");

        let r = reg.get("/").unwrap();
        assert!(r.unreachable);
        assert_eq!(r.title.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_stops_at_registered_ancestor() {
        let mut reg = PageRegistry::new();
        reg.register("/", &root());
        let docs = Url::parse("https://example.com/docs").unwrap();
        reg.upsert(
            "/docs",
            &docs,
            PagePatch {
                title: Some("Docs".to_string()),
                status_code: Some(200),
                reached: true,
            },
        );
        reg.register(
            "/docs/guide/intro",
            &Url::parse("https://example.com/docs/guide/intro").unwrap(),
        );

        reconcile(&mut reg, &root(), "example.com");

        // Only /docs/guide was missing; the fetched /docs entry is untouched.
        assert_eq!(reg.len(), 4);
        let docs = reg.get("/docs").unwrap();
        assert!(!docs.unreachable);
        assert_eq!(docs.title.as_deref(), Some("Docs"));
    }

    #[test]
    fn test_no_orphans_after_reconcile() {
        let mut reg = PageRegistry::new();
        reg.register("/", &root());
        for p in ["/x/y", "/a/b/c/d", "/solo"] {
            reg.register(p, &root().join(p).unwrap());
        }

        reconcile(&mut reg, &root(), "example.com");

        for entry in reg.iter() {
            if let Some(parent) = parent_of(&entry.path) {
                assert!(reg.contains(&parent), "orphaned path {}", entry.path);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut reg = PageRegistry::new();
        reg.register("/", &root());
        reg.register("/a/b", &Url::parse("https://example.com/a/b").unwrap());

        reconcile(&mut reg, &root(), "example.com");
        let first = reg.len();
        reconcile(&mut reg, &root(), "example.com");
        assert_eq!(reg.len(), first);
    }
}
