//! Quire LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `quire-domain`, used by the
//! pipeline's summarization stage.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use quire_llm::MockProvider;
//! use quire_domain::traits::LlmProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = MockProvider::new("Readers loved the pacing.");
//!     let summary = provider.generate("Summarize.", "great pacing").await.unwrap();
//!     assert_eq!(summary, "Readers loved the pacing.");
//! }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use quire_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed on the content sent to the model.
///
/// # Examples
///
/// ```
/// use quire_llm::MockProvider;
/// use quire_domain::traits::LlmProvider;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut provider = MockProvider::default();
/// provider.add_response("slow start", "Pacing drags early on.");
/// assert_eq!(
///     provider.generate("system", "slow start").await.unwrap(),
///     "Pacing drags early on."
/// );
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    last_system_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all content
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_system_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given content block
    pub fn add_response(&mut self, content: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(content.into(), response.into());
    }

    /// Configure to return an error for a specific content block
    pub fn add_error(&mut self, content: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(content.into(), "ERROR".to_string());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// System prompt passed on the most recent call
    pub fn last_system_prompt(&self) -> Option<String> {
        self.last_system_prompt.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn generate(&self, system_prompt: &str, content: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_system_prompt.lock().unwrap() = Some(system_prompt.to_string());

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(content) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
