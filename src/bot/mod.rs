//! Request handling: template resolution, reply formatting and the
//! per-request flow that ties them to the catalog cache.

pub mod handler;
pub mod resolver;
pub mod response;

pub use handler::{BotSettings, MemeBot};
pub use resolver::{resolve_template, ResolvedTemplate, CUSTOM_SLUG};
pub use response::{BotResponse, ResponseType};
