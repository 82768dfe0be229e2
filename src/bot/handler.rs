use std::sync::Arc;
use tracing::{debug, info, warn};

use super::resolver::resolve_template;
use super::response::{help_text, image_text, listing_text, BotResponse, USAGE_HINT};
use crate::command::{parse_command, Command, ParsedCommand};
use crate::errors::{AppError, AppResult};
use crate::memegen::{Catalog, CatalogCache, ImageRequest, MemegenApi};

/// Per-deployment settings that shape replies
#[derive(Debug, Clone, Default)]
pub struct BotSettings {
    /// Appended to image links as ` =<width>x` when set
    pub display_width: Option<u32>,
    /// Slash-command token. Stored only; requests are not checked against it.
    pub token: Option<String>,
}

/// Turns slash-command text into a chat reply.
///
/// Every outcome, including remote failures, becomes a [`BotResponse`].
pub struct MemeBot {
    api: Arc<dyn MemegenApi>,
    cache: Arc<CatalogCache>,
    settings: BotSettings,
}

impl MemeBot {
    /// Create a bot around a memegen API and a shared catalog cache
    pub fn new(api: Arc<dyn MemegenApi>, cache: Arc<CatalogCache>, settings: BotSettings) -> Self {
        Self {
            api,
            cache,
            settings,
        }
    }

    /// Catalog cache shared by all requests
    pub fn cache(&self) -> &Arc<CatalogCache> {
        &self.cache
    }

    /// Reply settings this bot was built with
    pub fn settings(&self) -> &BotSettings {
        &self.settings
    }

    /// Handle one slash-command invocation
    pub async fn handle(&self, text: &str) -> BotResponse {
        let command = parse_command(text);
        debug!(?command, "Parsed slash command");

        let result = match command {
            Command::Help => Ok(BotResponse::ephemeral(help_text())),
            Command::MissingTemplate => Ok(BotResponse::ephemeral(USAGE_HINT)),
            Command::List => self.list().await,
            Command::Generate(parsed) => self.generate(&parsed).await,
        };

        result.unwrap_or_else(|err| self.error_reply(err))
    }

    /// Cached catalog, fetched on first use
    pub async fn catalog(&self) -> AppResult<Arc<Catalog>> {
        self.cache.get_or_fetch(self.api.as_ref()).await
    }

    async fn list(&self) -> AppResult<BotResponse> {
        let catalog = self.catalog().await?;
        Ok(BotResponse::ephemeral(listing_text(&catalog)))
    }

    async fn generate(&self, parsed: &ParsedCommand) -> AppResult<BotResponse> {
        let catalog = self.catalog().await?;
        let resolved = resolve_template(&parsed.template_ref, &catalog)?;

        let request = ImageRequest {
            template_slug: resolved.slug,
            top_text: parsed.caption_top.clone(),
            bottom_text: parsed.caption_bottom.clone(),
            override_url: resolved.override_url,
            display_width: self.settings.display_width,
        };
        let url = self.api.image_url(&request)?;
        info!(template = %request.template_slug, url = %url, "Rendered meme link");

        Ok(BotResponse::in_channel(image_text(&url, request.display_width)))
    }

    fn error_reply(&self, err: AppError) -> BotResponse {
        match &err {
            AppError::TemplateNotFound { name } => {
                debug!(template = %name, "Unknown template requested");
            }
            AppError::UnrenderableText { text } => {
                debug!(text = %text, "Caption cannot be placed in a link");
            }
            _ => {
                warn!(category = err.category(), error = %err, "Slash command failed");
            }
        }
        BotResponse::ephemeral(err.to_string())
    }
}
