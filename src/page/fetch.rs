// src/page/fetch.rs
// =============================================================================
// This module downloads web pages.
//
// Key functionality:
// - Makes one HTTP GET request per page
// - Follows redirects and reports the final URL we landed on
// - Turns non-2xx statuses and transport failures into a FetchError
//
// There are no retries and no custom timeout: a page either answers or it
// is dropped from the exploration.
//
// Rust concepts:
// - Traits: Fetcher lets the explorer work with any page source
// - async fn in traits: the explorer awaits one fetch at a time
// =============================================================================

use crate::error::FetchError;
use reqwest::Client;
use tracing::trace;

const USER_AGENT: &str = concat!("domain-explorer/", env!("CARGO_PKG_VERSION"));

/// A page that was fetched successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL after all redirects were followed
    pub url: String,
    /// The response body as text
    pub body: String,
}

/// Anything that can turn a URL into a page.
///
/// The explorer only talks to this trait. The real implementation is
/// HttpFetcher; tests plug in an in-memory site instead.
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetches pages over HTTP(S) with a single reused client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // reqwest's default redirect policy follows up to 10 hops, which is all
    // we need to resolve a URL to its final location
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        trace!(url, "GET");

        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Grab the final URL before .text() consumes the response
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(categorize_error)?;

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}

// Categorizes a reqwest error that came without a usable status code
//
// The explorer only cares that the page is gone, but the reason ends up
// in the verbose log, so keep it readable.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status(status.as_u16());
    }

    let reason = if error.is_builder() {
        "malformed URL".to_string()
    } else if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else if error.is_body() || error.is_decode() {
        "unreadable response body".to_string()
    } else {
        error.to_string()
    };

    FetchError::BadUrl(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_fetch_returns_final_url_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/hello"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><body>hi</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let page = fetcher
            .fetch(&format!("{}/hello", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(page.url, format!("{}/hello", mock_server.uri()));
        assert_eq!(page.body, "<html><body>hi</body></html>");
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("location", format!("{}/new", mock_server.uri()).as_str()),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let page = fetcher
            .fetch(&format!("{}/old", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(page.url, format!("{}/new", mock_server.uri()));
        assert_eq!(page.body, "moved here");
    }

    #[tokio::test]
    async fn test_fetch_reports_status_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_malformed_url_is_bad_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("/just/a/path").await.unwrap_err();

        assert!(matches!(err, FetchError::BadUrl(_)));
        assert_eq!(err.status(), None);
    }
}
