//! Quire Domain Layer
//!
//! This crate contains the domain model for Quire, the book review digester.
//! It has no external dependencies and defines the record types that flow
//! through the scrape-and-normalize pipeline, plus the trait interfaces for
//! the two external collaborators (page fetching and summarization).
//!
//! ## Key Concepts
//!
//! - **ReviewRecord**: One review as scraped, with string-encoded counts and rating
//! - **NormalizedReview**: The typed row produced from a `ReviewRecord`
//! - **ReviewPage**: Title, author and every review found on a book's review page
//! - **BookDigest**: The final report surfaced to callers
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and invariants only
//! - Fetching, parsing and LLM calls live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod normalized;
pub mod review;
pub mod traits;

// Re-exports for convenience
pub use book::{BookDigest, ReviewPage};
pub use normalized::{NormalizedReview, ReviewTable};
pub use review::{ReviewRecord, ReviewerProfile, NOT_FOUND, NO_RATING_GIVEN};
