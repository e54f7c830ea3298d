//! Host identity for the same-host crawl restriction

/// Strips one leading `www.` label from a hostname
fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.")
        .or_else(|| host.strip_prefix("WWW."))
        .unwrap_or(host)
}

/// Compares two hostnames for crawl purposes
///
/// Hostnames are compared case-insensitively after stripping a single leading
/// `www.` label from each side, so `www.example.com` and `example.com` are the
/// same site while `shop.example.com` is not.
///
/// # Examples
///
/// ```
/// use sitegraph::url::same_host;
///
/// assert!(same_host("www.example.com", "example.com"));
/// assert!(!same_host("shop.example.com", "example.com"));
/// ```
pub fn same_host(a: &str, b: &str) -> bool {
    strip_www(a).eq_ignore_ascii_case(strip_www(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_hosts() {
        assert!(same_host("example.com", "example.com"));
    }

    #[test]
    fn test_www_is_ignored() {
        assert!(same_host("www.example.com", "example.com"));
        assert!(same_host("example.com", "www.example.com"));
        assert!(same_host("www.example.com", "www.example.com"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(same_host("Example.COM", "example.com"));
        assert!(same_host("WWW.EXAMPLE.COM", "example.com"));
    }

    #[test]
    fn test_subdomains_differ() {
        assert!(!same_host("shop.example.com", "example.com"));
        assert!(!same_host("www.shop.example.com", "example.com"));
    }

    #[test]
    fn test_only_one_www_label_stripped() {
        // www.www.example.com is a (strange) subdomain, not the apex.
        assert!(!same_host("www.www.example.com", "example.com"));
        assert!(same_host("www.www.example.com", "www.example.com"));
    }

    #[test]
    fn test_different_domains() {
        assert!(!same_host("example.com", "example.org"));
    }
}
