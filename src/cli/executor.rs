//! Command executor for dispatching CLI commands

use super::parser::{Cli, Commands};
use super::serve::ServeCommand;
use crate::config::{Environment, Settings};

/// Run the command selected on the command line. No subcommand means
/// `serve`.
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    let dry_run = match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => *dry_run,
        None => false,
    };

    ServeCommand::new(settings, environment)
        .execute(dry_run)
        .await
}
