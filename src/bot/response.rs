//! JSON reply shapes understood by the chat client

use serde::{Deserialize, Serialize};
use url::Url;

use crate::memegen::Catalog;

/// Width of the name column in the template listing
pub const LISTING_NAME_WIDTH: usize = 20;

/// Hint returned when captions are given without a template
pub const USAGE_HINT: &str = "try: /meme help";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible only to the requester
    Ephemeral,
    /// Visible to the whole channel
    InChannel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl BotResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }
}

pub fn help_text() -> String {
    [
        "",
        "Meme Bot",
        "**> Commands:**",
        "* `/meme memename;top_row;bottom_row` generate a meme image",
        "    (NOTE: memename can also be a URL to an image)",
        "* `/meme list` List templates",
        "* `/meme help` Shows this menu",
        "",
    ]
    .join("\n")
}

/// One line per template, in catalog order, inside a code fence
pub fn listing_text(catalog: &Catalog) -> String {
    let lines: Vec<String> = catalog
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{:<width$} {}",
                entry.name,
                entry.description,
                width = LISTING_NAME_WIDTH
            )
        })
        .collect();
    format!("```\n{}\n```", lines.join("\n"))
}

/// Markdown image link, with an optional display width suffix
pub fn image_text(url: &Url, display_width: Option<u32>) -> String {
    match display_width {
        Some(width) => format!("![image]({} ={}x)", url, width),
        None => format!("![image]({})", url),
    }
}
