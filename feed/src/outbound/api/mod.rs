//! JSON API adapters.
//!
//! Both adapters resolve paths against one base URL; timeouts live in their
//! reqwest clients.

mod dto;
mod http_source;
mod http_transport;

pub use http_source::HttpUserPostsSource;
pub use http_transport::HttpTransport;

use reqwest::Url;

/// Resolve `path` below `base`, keeping any path prefix `base` carries.
fn resolve(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut prefix = base.clone();
    if !prefix.path().ends_with('/') {
        let with_slash = format!("{}/", prefix.path());
        prefix.set_path(&with_slash);
    }
    prefix.join(path.trim_start_matches('/'))
}

/// Collapse whitespace and cap a response body for error messages.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
