// src/crawl/normalize.rs
// =============================================================================
// URL helpers used by the explorer.
//
// These work on plain strings on purpose. A URL's domain is whatever sits
// between the second and third '/', and its canonical form is everything
// before the first '?' and '#'. Relative links therefore have no domain and
// are never followed.
//
// Rust concepts:
// - Returning &str slices: no allocation, the result borrows from the input
// =============================================================================

/// How a link relates to the domain being explored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same host as the target domain, worth following
    InDomain,
    /// A different host that contains the target domain (blog.example.com)
    Subdomain,
    /// Anything else, including relative and empty links
    External,
}

/// Returns the host part of a URL, without a leading "www."
///
/// Returns "" when the URL has no host segment (relative or malformed).
pub fn domain_of(url: &str) -> &str {
    let host = url.split('/').nth(2).unwrap_or("");
    host.strip_prefix("www.").unwrap_or(host)
}

/// Drops the query string and the fragment from a URL.
///
/// Nothing else changes: no lower-casing, no trailing slash handling, no
/// resolution of "." or "..".
pub fn canonicalize(url: &str) -> &str {
    let url = url.find('?').map_or(url, |idx| &url[..idx]);
    url.find('#').map_or(url, |idx| &url[..idx])
}

/// Classifies a link against the target domain.
pub fn classify(link: &str, domain: &str) -> LinkKind {
    let host = domain_of(link);

    if host == domain {
        LinkKind::InDomain
    } else if !host.is_empty() && host.contains(domain) {
        LinkKind::Subdomain
    } else {
        LinkKind::External
    }
}
