//! HTML parsing: page title and outbound links
//!
//! Link extraction feeds every `<a href>` through [`crate::url::resolve_link`]
//! against the page's final URL, so relative hrefs, fragments, and dead-end
//! schemes (`mailto:`, `javascript:`, ...) are handled in one place. Host
//! filtering is deliberately *not* done here; the crawl applies it against the
//! working host, which can change after a redirect.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from one HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Text of the `<title>` element, trimmed; `None` if absent or empty
    pub title: Option<String>,

    /// Resolved absolute URLs of all followable links, in document order
    pub links: Vec<Url>,
}

/// Parses HTML and extracts the title and outbound links
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document, base_url),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            // File downloads are not pages.
            if element.value().attr("download").is_some() {
                continue;
            }
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_link(base_url, href) {
                    links.push(resolved);
                }
            }
        }
    }

    links
}
