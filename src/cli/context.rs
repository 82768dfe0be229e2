//! CLI Context for dependency injection and shared state

use std::sync::Arc;

use crate::bot::{BotSettings, MemeBot};
use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::logging::{init_logging, LoggingGuard};
use crate::memegen::{CatalogCache, MemegenClient, MemegenClientConfig};

use super::Cli;

/// CLI execution context containing validated configuration
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: ServerConfig,
    pub verbose: bool,
}

impl CliContext {
    /// Validate the parsed arguments into a context
    pub fn new(cli: &Cli) -> AppResult<Self> {
        let config = ServerConfig::new(
            &cli.listen,
            &cli.logfile,
            &cli.imgwidth,
            &cli.memegen_url,
            cli.token.clone(),
        )?;

        Ok(Self {
            config,
            verbose: cli.verbose,
        })
    }

    /// Initialize logging subsystem based on verbosity and configuration
    pub fn init_logging(&self) -> AppResult<LoggingGuard> {
        let guard = init_logging(&self.config.log, self.verbose)?;

        tracing::debug!("Listen address: {}", self.config.listen);
        tracing::debug!("Memegen URL: {}", self.config.memegen_url);
        if self.config.token.is_some() {
            tracing::info!("Slash-command token configured; incoming tokens are not verified");
        }

        Ok(guard)
    }

    /// Build the bot with a fresh, empty catalog cache
    pub fn build_bot(&self) -> AppResult<MemeBot> {
        let client = MemegenClient::new(MemegenClientConfig {
            base_url: self.config.memegen_url.to_string(),
            ..Default::default()
        })?;

        let settings = BotSettings {
            display_width: self.config.image_width,
            token: self.config.token.clone(),
        };

        Ok(MemeBot::new(
            Arc::new(client),
            Arc::new(CatalogCache::new()),
            settings,
        ))
    }
}
