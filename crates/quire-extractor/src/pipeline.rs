//! Pipeline orchestration: fetch → extract → normalize → join → summarize

use crate::config::PipelineConfig;
use crate::error::{ExtractorError, PipelineError, PipelineStage};
use crate::joiner::join_content;
use crate::normalizer::normalize;
use crate::parser::extract_reviews;
use quire_domain::traits::{LlmProvider, PageFetcher};
use quire_domain::{BookDigest, ReviewPage, ReviewTable};
use std::fmt::Display;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info};

/// Turns a review page URL into a thematic summary
///
/// Stages run strictly in sequence and hold no state between runs, so one
/// `Pipeline` can serve concurrent requests. Only the fetch and the LLM
/// call perform I/O; each is bounded by its configured timeout and made
/// exactly once.
pub struct Pipeline<F, L> {
    fetcher: F,
    llm_provider: L,
    config: PipelineConfig,
}

impl<F, L> Pipeline<F, L>
where
    F: PageFetcher,
    F::Error: Display,
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new Pipeline
    pub fn new(fetcher: F, llm_provider: L, config: PipelineConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            fetcher,
            llm_provider,
            config,
        })
    }

    /// Configuration in effect
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch the page and extract its raw review records
    pub async fn scrape(&self, url: &str) -> Result<ReviewPage, PipelineError> {
        info!(%url, "Fetching review page");
        let raw = self.fetch(url).await?;

        let page = extract_reviews(&raw)
            .map_err(|e| PipelineError::new(PipelineStage::Extract, e))?;
        info!(
            title = %page.title,
            author = %page.author,
            reviews = page.review_count(),
            "Extracted reviews"
        );
        Ok(page)
    }

    /// Fetch, extract and normalize; no LLM call
    pub async fn read_reviews(&self, url: &str) -> Result<ReviewTable, PipelineError> {
        let page = self.scrape(url).await?;
        Ok(normalize(&page))
    }

    /// Run every stage and return the digest
    pub async fn digest(&self, url: &str) -> Result<BookDigest, PipelineError> {
        let table = self.read_reviews(url).await?;
        self.summarize(&table).await
    }

    /// Join a normalized table and summarize it
    ///
    /// # Errors
    ///
    /// An empty table fails in the normalize stage with `NoReviews`; the
    /// provider is never called with an empty text block.
    pub async fn summarize(&self, table: &ReviewTable) -> Result<BookDigest, PipelineError> {
        if table.is_empty() {
            return Err(PipelineError::new(
                PipelineStage::Normalize,
                ExtractorError::NoReviews,
            ));
        }

        let content = join_content(&table.rows);
        debug!(chars = content.len(), rows = table.len(), "Joined review content");

        let started = Instant::now();
        let summary = timeout(
            self.config.summarize_timeout(),
            self.llm_provider
                .generate(&self.config.system_prompt, &content),
        )
        .await
        .map_err(|_| {
            PipelineError::new(
                PipelineStage::Summarize,
                ExtractorError::Timeout(self.config.summarize_timeout_secs),
            )
        })?
        .map_err(|e| {
            PipelineError::new(
                PipelineStage::Summarize,
                ExtractorError::Summarization(e.to_string()),
            )
        })?;

        info!(
            model = self.llm_provider.model_name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Summary generated"
        );

        Ok(BookDigest {
            title: table.title.clone(),
            author: table.author.clone(),
            review_count: table.len(),
            summary,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        let raw = timeout(self.config.fetch_timeout(), self.fetcher.fetch(url))
            .await
            .map_err(|_| {
                PipelineError::new(
                    PipelineStage::Fetch,
                    ExtractorError::Timeout(self.config.fetch_timeout_secs),
                )
            })?
            .map_err(|e| PipelineError::new(PipelineStage::Fetch, ExtractorError::Fetch(e.to_string())))?;
        debug!(bytes = raw.len(), "Fetched raw page");
        Ok(raw)
    }
}
