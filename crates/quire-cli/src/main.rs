//! Quire CLI - summarize what readers say about a book.

use clap::Parser;
use quire_cli::commands::{self, PipelineCommand};
use quire_cli::{Cli, Command, Config, Formatter};
use quire_extractor::Pipeline;
use quire_fetch::{FileFetcher, HttpFetcher};
use quire_llm::OllamaProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> quire_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load(Some(&config_path))?;

    if let Some(model) = cli.model {
        config.llm.model = model;
    }
    if let Some(endpoint) = cli.endpoint {
        config.llm.endpoint = endpoint;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let command = match cli.command {
        Command::Prompt => return commands::execute_prompt(&config),
        Command::Config(args) => {
            return commands::execute_config(args, &config, &config_path, &formatter)
        }
        Command::Digest(args) => PipelineCommand::Digest(args),
        Command::Reviews(args) => PipelineCommand::Reviews(args),
    };

    match cli.html_file {
        Some(path) => {
            tracing::info!(
                path = %path.display(),
                url = command.url(),
                "Reading review page from file"
            );
            run_pipeline(command, FileFetcher::new(path), &config, &formatter).await
        }
        None => {
            let fetcher = HttpFetcher::with_settings(
                &config.fetch.user_agent,
                config.pipeline.fetch_timeout(),
            )?;
            run_pipeline(command, fetcher, &config, &formatter).await
        }
    }
}

async fn run_pipeline<F>(
    command: PipelineCommand,
    fetcher: F,
    config: &Config,
    formatter: &Formatter,
) -> quire_cli::Result<()>
where
    F: quire_domain::traits::PageFetcher,
    F::Error: std::fmt::Display,
{
    let llm = OllamaProvider::with_timeout(
        config.llm.endpoint.clone(),
        config.llm.model.clone(),
        config.pipeline.summarize_timeout(),
    )?;
    let pipeline = Pipeline::new(fetcher, llm, config.pipeline.clone())?;

    command.execute(&pipeline, formatter).await
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
