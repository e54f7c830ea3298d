//! HTTP fetcher
//!
//! Builds the shared HTTP client and classifies the outcome of each page
//! fetch. Redirects are followed by the client (up to 10 hops); the final URL
//! is reported so the crawl can adopt a redirected host.

use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response
    Success {
        /// Final URL after any redirects
        final_url: Url,
        /// HTTP status code
        status_code: u16,
        /// Whether the response declared an HTML content type
        is_html: bool,
        /// Response body
        body: String,
    },

    /// Non-2xx response
    HttpError { status_code: u16 },

    /// Connection, DNS, TLS, or timeout failure (no status observed)
    NetworkError { error: String },
}

/// Builds the HTTP client used for the whole crawl
///
/// One fetch is awaited at a time, so the client needs no connection-pool
/// tuning; the per-request timeout closes the reference design's
/// unbounded-request gap.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and classifies the result
///
/// Exactly one attempt is made; there is no retry. A non-2xx status maps to
/// `HttpError`, transport failures to `NetworkError` with a short description
/// (timeouts and refused connections are named explicitly, matching what the
/// caller surfaces for a failed root).
pub async fn fetch_page(client: &Client, url: &Url) -> FetchOutcome {
    let response = match client.get(url.as_str()).send().await {
        Ok(r) => r,
        Err(e) => {
            let error = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            return FetchOutcome::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().clone();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    // Missing content type is treated as HTML; plenty of small sites omit it.
    let is_html = content_type.is_empty()
        || content_type.contains("text/html")
        || content_type.contains("application/xhtml");

    match response.text().await {
        Ok(body) => FetchOutcome::Success {
            final_url,
            status_code: status.as_u16(),
            is_html,
            body,
        },
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
        },
    }
}
