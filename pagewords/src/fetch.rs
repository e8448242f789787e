// src/fetch.rs
use anyhow::{Context as _, Result, bail};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Fetches the body of a web page.
///
/// # Arguments
///
/// * `page` - The url of the page to fetch
/// * `timeout` - Overall request timeout
///
/// # Returns
///
/// * `Ok(String)` - The page body as text
///
/// # Errors
///
/// This function may return an error if:
/// * The url cannot be parsed or is not http/https
/// * The request fails or times out
/// * The server responds with a non-success status
/// * The response body cannot be decoded as text
pub fn fetch_page(page: &str, timeout: Duration) -> Result<String> {
    let url = Url::parse(page).with_context(|| format!("Invalid url: {page}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("Unsupported url scheme '{}': {page}", url.scheme());
    }

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pagewords/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build http client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch page: {page}"))?
        .error_for_status()
        .with_context(|| format!("Request failed: {page}"))?;

    response
        .text()
        .with_context(|| format!("Failed to read response body: {page}"))
}
