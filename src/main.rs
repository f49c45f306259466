use anyhow::{Context, Result};
use chunkwise::{
    cli::{render_report, Cli},
    services::{ConsoleProgressReporter, WalkDirDiscovery},
    FileProcessor,
};
use clap::Parser;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // clapの環境変数フォールバックが .env の値も参照できるよう先に読み込む
    let dotenv_result = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(error) = dotenv_result {
        if !error.not_found() {
            warn!("Failed to load .env file: {error}");
        }
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli
        .processing_config()
        .context("Invalid processing configuration")?;

    let processor = FileProcessor::new(
        cli.strategy_kind(),
        config,
        ConsoleProgressReporter::new(),
        WalkDirDiscovery::new(),
    );

    let report = processor
        .process_with_stats(&cli.request())
        .await
        .context("Processing failed")?;

    println!("\n{}", render_report(&report));
    Ok(())
}
