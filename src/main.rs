use clap::Parser;

use swimshop_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = cli::load_and_merge_config(&cli).map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    cli::init_logger_from_settings(&settings).map_err(|e| {
        eprintln!("Logger initialization error: {}", e);
        e
    })?;

    cli::execute_command(&cli, settings, environment).await
}
