//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Quire - Summarize what readers say about a book.
#[derive(Debug, Parser)]
#[command(name = "quire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.quire/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ollama model to summarize with
    #[arg(short, long, global = true, env = "QUIRE_MODEL")]
    pub model: Option<String>,

    /// Ollama endpoint
    #[arg(long, global = true, env = "QUIRE_OLLAMA_URL")]
    pub endpoint: Option<String>,

    /// Read the review page from a saved HTML file instead of the network
    #[arg(long, global = true, value_name = "PATH")]
    pub html_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (summary text or reviewer names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape a book's reviews and summarize them
    Digest(DigestArgs),

    /// Scrape and normalize a book's reviews without summarizing
    Reviews(ReviewsArgs),

    /// Print the summarization system prompt in effect
    Prompt,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the digest command.
#[derive(Debug, Parser)]
pub struct DigestArgs {
    /// URL of the book's review page
    pub url: String,
}

/// Arguments for the reviews command.
#[derive(Debug, Parser)]
pub struct ReviewsArgs {
    /// URL of the book's review page
    pub url: String,

    /// Show records as scraped, before normalization
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
