//! Quire Page Fetcher
//!
//! Implementations of the `PageFetcher` trait from `quire-domain`.
//!
//! - `HttpFetcher`: single GET with a browser-like User-Agent and a timeout
//! - `FileFetcher`: serves a saved page from disk, for offline runs
//!
//! Fetch failures are reported as [`FetchError`] so callers can tell
//! "the page could not be retrieved" apart from "the page was retrieved but
//! its markup is not what we expected".

#![warn(missing_docs)]

mod error;
mod file;
mod http;

pub use error::FetchError;
pub use file::FileFetcher;
pub use http::{HttpFetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
