//! Command implementations.

pub mod config;
pub mod digest;
pub mod prompt;
pub mod reviews;

pub use self::config::execute_config;
pub use self::digest::execute_digest;
pub use self::prompt::execute_prompt;
pub use self::reviews::execute_reviews;

use crate::cli::{DigestArgs, ReviewsArgs};
use crate::error::Result;
use crate::output::Formatter;
use quire_domain::traits::{LlmProvider, PageFetcher};
use quire_extractor::Pipeline;
use std::fmt::Display;

/// Commands that run the scraping pipeline.
#[derive(Debug)]
pub enum PipelineCommand {
    /// Scrape and summarize
    Digest(DigestArgs),
    /// Scrape and normalize only
    Reviews(ReviewsArgs),
}

impl PipelineCommand {
    /// Review page URL the command targets.
    pub fn url(&self) -> &str {
        match self {
            PipelineCommand::Digest(args) => &args.url,
            PipelineCommand::Reviews(args) => &args.url,
        }
    }

    /// Run the command against a constructed pipeline.
    pub async fn execute<F, L>(self, pipeline: &Pipeline<F, L>, formatter: &Formatter) -> Result<()>
    where
        F: PageFetcher,
        F::Error: Display,
        L: LlmProvider,
        L::Error: Display,
    {
        match self {
            PipelineCommand::Digest(args) => execute_digest(args, pipeline, formatter).await,
            PipelineCommand::Reviews(args) => execute_reviews(args, pipeline, formatter).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use quire_extractor::{PipelineConfig, PipelineStage};
    use quire_fetch::FileFetcher;
    use quire_llm::MockProvider;
    use tempfile::TempDir;

    const URL: &str = "https://www.goodreads.com/book/show/1";

    fn page(lists: &str) -> String {
        format!(
            r#"<html><body>
<h1 data-testid="bookTitle">Yellowface</h1>
<span class="ContributorLink__name" data-testid="name">R.F. Kuang</span>
{lists}
</body></html>"#
        )
    }

    fn card(name: &str, body: &str) -> String {
        format!(
            r#"<article class="ReviewCard">
<section class="ReviewerProfile__info"><a href="/user/show/{name}">{name}</a></section>
<span class="Formatted">{body}</span>
</article>"#
        )
    }

    fn pipeline_over(
        dir: &TempDir,
        html: &str,
        llm: MockProvider,
    ) -> Pipeline<FileFetcher, MockProvider> {
        let path = dir.path().join("page.html");
        std::fs::write(&path, html).unwrap();
        Pipeline::new(FileFetcher::new(path), llm, PipelineConfig::default()).unwrap()
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[test]
    fn test_url_for_each_command() {
        let digest = PipelineCommand::Digest(DigestArgs { url: URL.to_string() });
        let reviews = PipelineCommand::Reviews(ReviewsArgs {
            url: "other".to_string(),
            raw: true,
        });
        assert_eq!(digest.url(), URL);
        assert_eq!(reviews.url(), "other");
    }

    #[tokio::test]
    async fn test_reviews_never_calls_llm() {
        let dir = TempDir::new().unwrap();
        let html = page(&format!(
            r#"<div class="ReviewsList"></div><div class="ReviewsList">{}</div>"#,
            card("ada", "Sharp.")
        ));
        let llm = MockProvider::default();
        let pipeline = pipeline_over(&dir, &html, llm.clone());

        let command = PipelineCommand::Reviews(ReviewsArgs {
            url: URL.to_string(),
            raw: false,
        });
        command.execute(&pipeline, &formatter()).await.unwrap();
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_digest_calls_llm_once() {
        let dir = TempDir::new().unwrap();
        let html = page(&format!(
            r#"<div class="ReviewsList"></div><div class="ReviewsList">{}</div>"#,
            card("ada", "Sharp.")
        ));
        let llm = MockProvider::default();
        let pipeline = pipeline_over(&dir, &html, llm.clone());

        let command = PipelineCommand::Digest(DigestArgs { url: URL.to_string() });
        command.execute(&pipeline, &formatter()).await.unwrap();
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_digest_surfaces_stage_error() {
        let dir = TempDir::new().unwrap();
        let html = page(r#"<div class="ReviewsList"></div>"#);
        let pipeline = pipeline_over(&dir, &html, MockProvider::default());

        let command = PipelineCommand::Digest(DigestArgs { url: URL.to_string() });
        let err = command.execute(&pipeline, &formatter()).await.unwrap_err();
        match err {
            CliError::Pipeline(e) => assert_eq!(e.stage, PipelineStage::Extract),
            other => panic!("Expected pipeline error, got {:?}", other),
        }
    }
}
