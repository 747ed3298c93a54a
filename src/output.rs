// src/output.rs
// =============================================================================
// Writes the result files: one URL (or subdomain) per line.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

/// Writes `lines` joined by newlines to `path`, replacing any existing file.
pub async fn write_lines<'a, I>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let contents = lines
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[tokio::test]
    async fn test_write_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domain.txt");
        let urls: BTreeSet<String> = ["https://www.example.com/b", "https://www.example.com/a"]
            .into_iter()
            .map(String::from)
            .collect();

        write_lines(&path, &urls).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://www.example.com/a\nhttps://www.example.com/b"
        );
    }

    #[tokio::test]
    async fn test_write_lines_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subdomains.txt");

        write_lines(&path, &BTreeSet::new()).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_lines_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope/domain.txt");

        let err = write_lines(&path, &BTreeSet::new()).await.unwrap_err();

        assert!(err.to_string().contains("failed to write"));
    }
}
