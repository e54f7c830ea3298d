//! Sitemap XML parsing
//!
//! Extracts `<loc>` values from sitemap documents. Both `<urlset>` sitemaps
//! and `<sitemapindex>` files carry their URLs in `<loc>` elements, so a flat
//! scan over the XML event stream covers both shapes; entries are treated as
//! plain URL strings and validated later by the discoverer.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts every `<loc>` text value from a sitemap XML document
///
/// Parsing is tolerant: a malformed document yields whatever locs were read
/// before the error rather than failing.
pub fn extract_locs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut locs = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(t)) if in_loc => {
                if let Ok(text) = t.unescape() {
                    let value = text.trim().to_string();
                    if !value.is_empty() {
                        locs.push(value);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!("sitemap XML error, keeping {} locs: {}", locs.len(), e);
                break;
            }
            _ => {}
        }
    }

    locs
}
