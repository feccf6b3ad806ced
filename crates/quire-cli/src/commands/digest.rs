//! Digest command implementation.

use crate::cli::DigestArgs;
use crate::error::Result;
use crate::output::Formatter;
use quire_domain::traits::{LlmProvider, PageFetcher};
use quire_extractor::Pipeline;
use std::fmt::Display;

/// Execute the digest command.
pub async fn execute_digest<F, L>(
    args: DigestArgs,
    pipeline: &Pipeline<F, L>,
    formatter: &Formatter,
) -> Result<()>
where
    F: PageFetcher,
    F::Error: Display,
    L: LlmProvider,
    L::Error: Display,
{
    let digest = pipeline.digest(&args.url).await?;
    println!("{}", formatter.format_digest(&digest)?);
    Ok(())
}
