//! Prompt command implementation.

use crate::config::Config;
use crate::error::Result;

/// Print the system prompt the summarize stage will send.
pub fn execute_prompt(config: &Config) -> Result<()> {
    println!("{}", config.pipeline.system_prompt.trim_end());
    Ok(())
}
