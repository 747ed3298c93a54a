// src/crawl/persist.rs
// =============================================================================
// Saves fetched pages to disk, mirroring the URL path structure.
//
//   https://www.example.com            -> pages/index.html
//   https://www.example.com/docs/intro -> pages/docs/intro.html
//   https://www.example.com/a/b.php    -> pages/a/b.html
//
// The url crate resolves "." and ".." while parsing, so a page can never be
// written outside the root directory.
// =============================================================================

use crate::error::PersistError;
use std::path::PathBuf;
use tracing::trace;
use url::Url;

/// Default root directory for saved pages
pub const DEFAULT_PAGES_DIR: &str = "pages";

const DOCUMENT_EXTENSION: &str = "html";
const INDEX_FILE: &str = "index.html";

/// Writes page HTML under a root directory
#[derive(Debug, Clone)]
pub struct PagePersister {
    root: PathBuf,
}

impl PagePersister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Works out where the page for `url` should be stored
    pub fn path_for(&self, url: &str) -> Result<PathBuf, PersistError> {
        let parsed = Url::parse(url).map_err(|source| PersistError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if segments.is_empty() {
            return Ok(self.root.join(INDEX_FILE));
        }

        let mut path = self.root.clone();
        path.extend(segments);
        path.set_extension(DOCUMENT_EXTENSION);
        Ok(path)
    }

    /// Saves `content` as the document for `url`, creating directories as needed.
    ///
    /// Returns the path that was written.
    pub async fn persist(&self, content: &str, url: &str) -> Result<PathBuf, PersistError> {
        let path = self.path_for(url)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;

        trace!(path = %path.display(), "page written");
        Ok(path)
    }
}
