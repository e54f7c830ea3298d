use crate::UrlError;
use url::Url;

/// Normalizes an arbitrary domain or URL input into a scheme-qualified root URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prefix `https://` if no scheme is present
/// 3. Parse; reject if malformed or missing a host
/// 4. Force the path to `/`
/// 5. Clear query and fragment
///
/// The result always points at the root of the site, so the function is
/// idempotent: normalizing an already-normalized root is a no-op.
///
/// # Arguments
///
/// * `input` - A bare domain (`example.com`), or any URL on the site
///
/// # Returns
///
/// * `Ok(Url)` - The root URL, e.g. `https://example.com/`
/// * `Err(UrlError)` - The input cannot be parsed into a host-bearing URL
///
/// # Examples
///
/// ```
/// use sitegraph::url::normalize_root;
///
/// let root = normalize_root("example.com/deep/page?q=1").unwrap();
/// assert_eq!(root.as_str(), "https://example.com/");
/// ```
pub fn normalize_root(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty input".to_string()));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Resolves an href found on a page into an absolute, fetchable URL
///
/// Returns `None` (meaning: skip this link) for hrefs that can never become a
/// crawlable page:
/// - empty or fragment-only hrefs
/// - `mailto:`, `tel:`, `javascript:`, `data:` schemes
/// - hrefs that fail to resolve against the base
/// - resolutions that land outside http(s)
///
/// On success the resolved URL has its fragment and query cleared and its
/// scheme forced to match the base, so `http`/`https` variants of the same
/// page collapse to one entry.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);
    resolved.set_query(None);

    // Collapse scheme differences so http://host/p and https://host/p dedupe.
    if resolved.scheme() != base.scheme() && resolved.set_scheme(base.scheme()).is_err() {
        return None;
    }

    Some(resolved)
}
