//! Listing fetch over HTTP.
//!
//! One GET to the bucket root per invocation. The client is built once
//! from config and passed in explicitly; there is no shared request
//! handle, no retry and no cancellation.

use std::io::{self, ErrorKind};
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::Config;

/// Bucket root endpoint for a page URL: its origin, with any explicit
/// non-default port preserved.
pub fn bucket_root(page_url: &Url) -> io::Result<String> {
    if !matches!(page_url.scheme(), "http" | "https") {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("unsupported URL scheme '{}'", page_url.scheme()),
        ));
    }
    Ok(page_url.origin().ascii_serialization())
}

/// Build the HTTP client used for the listing request. The timeout comes
/// from config; without one the request may wait indefinitely.
pub fn build_client(config: &Config) -> io::Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = config.request_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| io::Error::other(format!("failed to build HTTP client: {}", e)))
}

/// GET the bucket root and return the complete response body.
///
/// Resolves only once the exchange has fully finished; a non-success
/// status is an error.
pub async fn fetch_listing(client: &Client, page_url: &Url) -> io::Result<String> {
    let root = bucket_root(page_url)?;
    log::debug!("fetching bucket listing from {}", root);
    let response = client
        .get(&root)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| io::Error::other(format!("listing request to {} failed: {}", root, e)))?;
    response
        .text()
        .await
        .map_err(|e| io::Error::other(format!("reading listing body failed: {}", e)))
}
