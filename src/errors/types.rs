//! Error types for the memebot service
//!
//! Variants are grouped by where they arise: startup configuration,
//! the remote memegen catalog, template resolution and the HTTP surface.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid configuration value for '{key}': {value}")]
    InvalidConfigValue {
        key: String,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // I/O errors
    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Remote catalog errors. The display form is what the requester sees.
    #[error("{url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("meme not found\ntry: /meme list")]
    TemplateNotFound { name: String },

    #[error("cannot render \"{text}\" in an image link\ntry: /meme help")]
    UnrenderableText { text: String },

    // HTTP surface
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new InvalidConfigValue error
    pub fn invalid_config_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
            source: None,
        }
    }

    /// Create a new InvalidConfigValue error with source
    pub fn invalid_config_value_with_source(
        key: impl Into<String>,
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Fetch error
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new TemplateNotFound error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    /// Create a new UnrenderableText error
    pub fn unrenderable_text(text: impl Into<String>) -> Self {
        Self::UnrenderableText { text: text.into() }
    }

    /// Create a new Server error with source
    pub fn server_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Server {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Internal error with source
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Short machine-readable category, used as a structured log field
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } | Self::InvalidConfigValue { .. } => "config",
            Self::Io { .. } => "io",
            Self::Fetch { .. } => "fetch",
            Self::TemplateNotFound { .. } | Self::UnrenderableText { .. } => "template",
            Self::Server { .. } => "server",
            Self::Internal { .. } => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_error_display() {
        let err = AppError::fetch("https://memegen.link/api/templates/", "connection refused");
        assert_eq!(
            err.to_string(),
            "https://memegen.link/api/templates/: connection refused"
        );
        assert_eq!(err.category(), "fetch");
    }

    #[test]
    fn test_template_not_found_display() {
        let err = AppError::template_not_found("nope");
        assert_eq!(err.to_string(), "meme not found\ntry: /meme list");
    }

    #[test]
    fn test_unrenderable_text_display() {
        let err = AppError::unrenderable_text("..");
        assert_eq!(err.to_string(), "cannot render \"..\" in an image link\ntry: /meme help");
        assert_eq!(err.category(), "template");
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::config_with_source("Failed to open log file", io);
        assert_eq!(err.category(), "config");
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Failed to open log file"));
    }

    #[test]
    fn test_invalid_config_value_display() {
        let err = AppError::invalid_config_value("imgwidth", "wide");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'imgwidth': wide"
        );
        assert_eq!(err.category(), "config");
    }
}
