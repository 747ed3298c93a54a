// src/page/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Links are returned exactly as written in the page. Nothing is resolved,
// filtered or normalized here: an <a> without an href gives an empty
// string, and the explorer's domain check throws it away later.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every <a> tag in the HTML
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no link</a>"
//   result = ["/docs", ""]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing it can only fail on a typo here
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .map(|element| element.value().attr("href").unwrap_or("").to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        assert_eq!(extract_links(html), vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_relative_link_is_kept_verbatim() {
        let html = r#"<a href="/docs?page=2#top">Docs</a>"#;
        assert_eq!(extract_links(html), vec!["/docs?page=2#top"]);
    }

    #[test]
    fn test_anchor_without_href_gives_empty_string() {
        let html = r#"<a name="top">Top</a><a href="https://example.com/a">A</a>"#;
        assert_eq!(extract_links(html), vec!["", "https://example.com/a"]);
    }

    #[test]
    fn test_ignores_non_anchor_elements() {
        let html = r#"
            <link href="https://example.com/style.css">
            <img src="https://example.com/logo.png">
            <a href="https://example.com/about">About</a>
        "#;
        assert_eq!(extract_links(html), vec!["https://example.com/about"]);
    }

    #[test]
    fn test_no_links() {
        assert!(extract_links("<html><body><p>nothing here</p></body></html>").is_empty());
        assert!(extract_links("").is_empty());
    }
}
