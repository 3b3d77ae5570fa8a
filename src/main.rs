use anyhow::Result;
use clap::Parser;
use tracing::error;

use artistly_core::config::AppConfig;
use artistly_lib::bootstrap::{load_config, tracing::init_tracing_subscriber, AppRuntime};
use artistly_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };
    let runtime = AppRuntime::from_config(&config);

    match cli::execute(&runtime, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "command failed");
            Err(err)
        }
    }
}
