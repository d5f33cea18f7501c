use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use playerscraper::{ScrapeConfig, run};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries nothing but the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ScrapeConfig::default();

    match run(&config).await {
        Ok(report) => {
            print!("{}", report.render());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
