//! Path arithmetic for the page hierarchy
//!
//! Every page is keyed by its normalized path: root is `"/"`, everything else
//! starts with `/` and never ends with one. Depth and the syntactic parent
//! relation are derived purely from that string, independent of which page
//! actually linked where.

use url::Url;

/// Returns the normalized path of a URL
///
/// The trailing `/` is removed (so `/about/` and `/about` are the same page);
/// an empty result normalizes to `"/"`.
pub fn clean_path(url: &Url) -> String {
    let path = url.path().trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Returns the depth of a normalized path
///
/// Root (`"/"`) has depth 0; otherwise depth is the number of non-empty
/// `/`-separated segments.
pub fn depth_of(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Returns the syntactic parent of a normalized path
///
/// * `None` for the root
/// * `"/"` for depth-1 paths
/// * the path with its final segment stripped otherwise
pub fn parent_of(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }

    match path.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(path[..idx].to_string()),
        None => None,
    }
}

/// Returns the final segment of a normalized path, if any
///
/// Used as the fallback label for pages without a fetched title.
pub fn last_segment(path: &str) -> Option<&str> {
    path.rsplit('/').find(|s| !s.is_empty())
}
