//! URL handling module for Shelter-Scout
//!
//! This module provides host extraction, relative href resolution, and
//! derivation of the candidate listing URLs probed under every shelter root.

use url::Url;

/// Listing index paths probed under every shelter root.
///
/// Most shelters expose only one of these; the missing ones answer 404 and
/// the corresponding branch simply yields no profiles.
pub const LISTING_PATHS: &[&str] = &["listado", "avisos", "particulares"];

/// Extracts the source domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to
/// lowercase. If the URL has no host (which shouldn't happen for valid
/// HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use shelter_scout::url::extract_domain;
///
/// let url = Url::parse("http://refugio.bambu-cms.org/ficha/12").unwrap();
/// assert_eq!(extract_domain(&url), Some("refugio.bambu-cms.org".to_string()));
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Derives the candidate listing URLs for a shelter root.
///
/// A trailing slash is inserted exactly once when the root lacks one, then
/// each listing path suffix is appended.
pub fn listing_urls(shelter_url: &Url) -> Vec<Url> {
    let mut base = shelter_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    LISTING_PATHS
        .iter()
        .filter_map(|path| Url::parse(&format!("{}{}", base, path)).ok())
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - Empty or fragment-only hrefs
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
