//! Reviews command implementation.

use crate::cli::ReviewsArgs;
use crate::error::Result;
use crate::output::Formatter;
use quire_domain::traits::{LlmProvider, PageFetcher};
use quire_extractor::Pipeline;
use std::fmt::Display;

/// Execute the reviews command.
///
/// Never calls the LLM; `--raw` stops before normalization.
pub async fn execute_reviews<F, L>(
    args: ReviewsArgs,
    pipeline: &Pipeline<F, L>,
    formatter: &Formatter,
) -> Result<()>
where
    F: PageFetcher,
    F::Error: Display,
    L: LlmProvider,
    L::Error: Display,
{
    let output = if args.raw {
        let page = pipeline.scrape(&args.url).await?;
        formatter.format_records(&page)?
    } else {
        let table = pipeline.read_reviews(&args.url).await?;
        formatter.format_table(&table)?
    };

    println!("{}", output);
    Ok(())
}
