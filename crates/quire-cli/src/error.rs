//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pipeline stage failed
    #[error("{0}")]
    Pipeline(#[from] quire_extractor::PipelineError),

    /// Pipeline could not be constructed
    #[error("{0}")]
    Extractor(#[from] quire_extractor::ExtractorError),

    /// Page fetcher could not be constructed
    #[error("Fetcher error: {0}")]
    Fetch(#[from] quire_fetch::FetchError),

    /// LLM provider could not be constructed
    #[error("LLM error: {0}")]
    Llm(#[from] quire_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
