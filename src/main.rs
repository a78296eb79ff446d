// ego-ranking entry point.
// Parses arguments, sets up logging, and runs the report on a tokio runtime.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ego_ranking::{CatalogClient, Cli, RankingError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            // Printed unconditionally: RUST_LOG may filter the error event out.
            let _ = report_failure(&e, io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

fn report_failure<W: Write>(err: &RankingError, mut out: W) -> io::Result<()> {
    writeln!(out, "error: {}", err)
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let matcher = cli.matcher()?;
    let client = CatalogClient::new()?;

    let stdout = io::stdout();
    ego_ranking::run(&config, &matcher, &client, stdout.lock()).await?;
    Ok(())
}
