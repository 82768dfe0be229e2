//! Memebot Library
//!
//! A chat slash-command webhook: it parses `/meme template;top;bottom`,
//! resolves the template against the memegen catalog and replies with a
//! rendered image link.

pub mod bot;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod logging;
pub mod memegen;
pub mod server;

// Re-export commonly used types for convenience
pub use bot::{BotResponse, BotSettings, MemeBot, ResponseType};
pub use config::{LogDestination, ServerConfig};
pub use errors::{AppError, AppResult};
pub use memegen::{Catalog, CatalogCache, MemegenApi, MemegenClient, MemegenClientConfig};
