//! Fetcher that reads a saved page from disk.

use crate::error::FetchError;
use quire_domain::traits::PageFetcher;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serves one saved HTML file regardless of the URL asked for
///
/// Lets the pipeline run offline against a page saved from a browser.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    /// Create a fetcher for the page saved at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the saved page
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageFetcher for FileFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
        let bytes = tokio::fs::read(&self.path).await?;
        info!(
            path = %self.path.display(),
            %url,
            bytes = bytes.len(),
            "Read saved page"
        );
        Ok(bytes)
    }
}
