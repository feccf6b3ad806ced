//! Quire Extractor
//!
//! Scrapes a book's review page, normalizes the reviews into a typed table
//! and asks an LLM for a thematic summary.
//!
//! # Architecture
//!
//! ```text
//! URL → PageFetcher → raw HTML → parser → ReviewPage → normalizer → ReviewTable
//!     → joiner → text → LlmProvider → BookDigest
//! ```
//!
//! Extraction fails loudly when load-bearing markup (title, author, review
//! list, reviewer link, review body) is missing. Optional presentation
//! fields (counts, ratings, author badge) degrade to defaults instead.
//!
//! # Example Usage
//!
//! ```no_run
//! use quire_extractor::{Pipeline, PipelineConfig};
//! use quire_fetch::HttpFetcher;
//! use quire_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpFetcher::new()?;
//! let llm = OllamaProvider::default_endpoint("llama3.2:3b")?;
//! let pipeline = Pipeline::new(fetcher, llm, PipelineConfig::default())?;
//!
//! let digest = pipeline
//!     .digest("https://www.goodreads.com/book/show/62047984-yellowface")
//!     .await?;
//! println!("{} by {}\n{}", digest.title, digest.author, digest.summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod joiner;
mod normalizer;
mod parser;
mod pipeline;
mod prompt;
pub mod selectors;

#[cfg(test)]
mod fixtures;

pub use config::PipelineConfig;
pub use error::{ExtractorError, PipelineError, PipelineStage};
pub use joiner::join_content;
pub use normalizer::{
    normalize, normalize_review, parse_followers_count, parse_rating, parse_reviews_count,
    MAX_RATING,
};
pub use parser::{
    extract, extract_reviews, parse_document, MetaSpan, EXPECTED_REVIEW_LISTS,
    LEADING_DECOY_LISTS,
};
pub use pipeline::Pipeline;
pub use prompt::SUMMARY_SYSTEM_PROMPT;
