// src/error.rs
// =============================================================================
// Error types for the two things that can go wrong while exploring a domain:
// - fetching a page (bad status code, DNS failure, malformed URL, ...)
// - saving a page to disk
//
// Neither of these stops an exploration. The explorer matches on them, logs
// them and moves on to the next URL.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

/// Why a page could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// No usable answer at all (DNS, connection, malformed URL, unreadable body)
    #[error("Bad URL ({0})")]
    BadUrl(String),
}

impl FetchError {
    /// The HTTP status code, when the server gave us one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::BadUrl(_) => None,
        }
    }
}

/// Why a page could not be saved.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("cannot derive a file path from '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status(404);
        assert_eq!(err.to_string(), "HTTP 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_bad_url_has_no_status() {
        let err = FetchError::BadUrl("relative URL without a base".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Bad URL"));
    }
}
