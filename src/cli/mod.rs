//! CLI module providing command-line interface functionality

pub mod commands;
pub mod context;
pub mod handlers;

use clap::Parser;

pub use commands::{Cli, Commands};
pub use context::CliContext;
pub use handlers::CommandHandler;

use crate::errors::AppResult;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command
    pub async fn run() -> AppResult<()> {
        let cli = Cli::parse();

        let context = CliContext::new(&cli)?;
        let _logging = context.init_logging()?;

        let handler = CommandHandler::new(context);
        handler
            .handle_command(cli.command.unwrap_or(Commands::Serve))
            .await
    }
}
