//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with a proper user agent string
//! - GET requests to fetch page content
//! - Classification of failures into the branch fault taxonomy

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::error::Error as _;
use std::time::Duration;
use url::Url;

/// A classified fetch failure, scoped to a single traversal branch.
///
/// Faults are handled at the point of the failed fetch: one log line, then
/// the branch terminates. They never propagate to sibling branches.
#[derive(Debug)]
pub enum FetchFault {
    /// Non-success HTTP response status
    Http { url: String, status: u16 },

    /// Name resolution failed
    Dns { url: String },

    /// Connection or response timeout
    Timeout { url: String },

    /// Residual transport failure (connection reset, TLS, body read)
    Network { url: String, message: String },
}

impl FetchFault {
    /// Writes the single per-fault log line: category plus offending URL.
    pub fn log(&self) {
        match self {
            Self::Http { url, status } => tracing::error!("HttpError {} on {}", status, url),
            Self::Dns { url } => tracing::error!("DnsLookupError on {}", url),
            Self::Timeout { url } => tracing::error!("TimeoutError on {}", url),
            Self::Network { url, message } => {
                tracing::error!("NetworkError on {}: {}", url, message)
            }
        }
    }
}

/// Builds the HTTP client shared by every traversal branch
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `request_timeout` - Overall per-request timeout
/// * `connect_timeout` - Connection establishment timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    config: &UserAgentConfig,
    request_timeout: Duration,
    connect_timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    // The target site serves plain HTTP and ordinary redirects, so the
    // default redirect policy applies and https is not enforced.
    Client::builder()
        .user_agent(user_agent)
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page body, classifying every failure mode.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchFault> {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(error) => return Err(classify_transport_error(url, &error)),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFault::Http {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }

    match response.text().await {
        Ok(body) => Ok(body),
        Err(error) => Err(classify_transport_error(url, &error)),
    }
}

fn classify_transport_error(url: &Url, error: &reqwest::Error) -> FetchFault {
    if error.is_timeout() {
        FetchFault::Timeout {
            url: url.to_string(),
        }
    } else if is_dns_failure(error) {
        FetchFault::Dns {
            url: url.to_string(),
        }
    } else {
        FetchFault::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// reqwest does not expose DNS failures directly; they surface as connect
/// errors whose source chain mentions the resolver.
fn is_dns_failure(error: &reqwest::Error) -> bool {
    if !error.is_connect() {
        return false;
    }

    let mut source = error.source();
    while let Some(inner) = source {
        let message = inner.to_string();
        if message.contains("dns error") || message.contains("failed to lookup") {
            return true;
        }
        source = inner.source();
    }

    false
}
