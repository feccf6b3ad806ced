//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and infrastructure.
//! Implementations live in other crates.

use std::future::Future;

/// Trait for retrieving a raw review page
///
/// Implemented by the infrastructure layer (quire-fetch)
pub trait PageFetcher {
    /// Error type for fetch operations
    type Error;

    /// Fetch the raw document bytes behind `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (quire-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for `content` under the given system instruction
    fn generate(
        &self,
        system_prompt: &str,
        content: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Name of the model behind this provider, for logging
    fn model_name(&self) -> &str;
}
