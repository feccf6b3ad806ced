//! Error types for the review pipeline

use std::fmt;
use thiserror::Error;

/// Errors that can occur while turning a review page into a digest
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The page could not be retrieved
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Expected markup is missing; the site layout no longer matches
    #[error("Structure not found: {what}")]
    StructureNotFound {
        /// Which element (and, for per-review fields, which review) was missing
        what: String,
    },

    /// The review list was found but held no reviews to summarize
    #[error("No reviews found on page")]
    NoReviews,

    /// The LLM provider failed
    #[error("Summarization failed: {0}")]
    Summarization(String),

    /// A collaborator did not answer within its time budget
    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Shorthand for a missing-markup error
    pub fn structure(what: impl Into<String>) -> Self {
        ExtractorError::StructureNotFound { what: what.into() }
    }
}

/// Pipeline stage, used to report where a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Retrieving the raw page
    Fetch,
    /// Parsing the document and extracting review records
    Extract,
    /// Coercing fields and joining review text
    Normalize,
    /// Calling the LLM provider
    Summarize,
}

impl PipelineStage {
    /// Stage name as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Fetch => "fetch",
            PipelineStage::Extract => "extract",
            PipelineStage::Normalize => "normalize",
            PipelineStage::Summarize => "summarize",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pipeline failure tagged with the stage that produced it
#[derive(Error, Debug)]
#[error("{stage} stage failed: {source}")]
pub struct PipelineError {
    /// Stage that failed
    pub stage: PipelineStage,
    /// Underlying cause
    #[source]
    pub source: ExtractorError,
}

impl PipelineError {
    /// Tag an error with its stage
    pub fn new(stage: PipelineStage, source: ExtractorError) -> Self {
        Self { stage, source }
    }
}
