//! Command handlers

use std::sync::Arc;
use tracing::info;

use super::{CliContext, Commands};
use crate::errors::{AppError, AppResult};
use crate::server;

/// Routes a CLI command to its implementation
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    pub async fn handle_command(&self, command: Commands) -> AppResult<()> {
        match command {
            Commands::Serve => self.handle_serve().await,
            Commands::Render { text } => self.handle_render(&text).await,
            Commands::Templates => self.handle_templates().await,
        }
    }

    async fn handle_serve(&self) -> AppResult<()> {
        let bot = Arc::new(self.context.build_bot()?);
        info!(
            listen = %self.context.config.listen,
            memegen = %self.context.config.memegen_url,
            "Starting memebot"
        );
        server::serve(self.context.config.listen, bot).await
    }

    async fn handle_render(&self, text: &str) -> AppResult<()> {
        let bot = self.context.build_bot()?;
        let response = bot.handle(text).await;
        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| AppError::internal_with_source("Failed to serialize reply", e))?;
        println!("{}", json);
        Ok(())
    }

    async fn handle_templates(&self) -> AppResult<()> {
        let bot = self.context.build_bot()?;
        let catalog = bot.catalog().await?;

        if catalog.is_empty() {
            println!("No templates available");
            return Ok(());
        }

        println!("Available templates:");
        for entry in catalog.entries() {
            println!("  {:<20} {}", entry.name, entry.description);
        }
        Ok(())
    }
}
