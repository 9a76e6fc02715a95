use anyhow::Result;
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let logs_dir = studio::logging::logs_dir()?;
    let (log_path, _guard) = studio::logging::init_logging(&logs_dir, cli.verbose)?;
    tracing::debug!(path = %log_path.display(), "Logging initialized");

    cli.run().await
}
