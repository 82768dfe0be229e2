//! Startup configuration
//!
//! Raw values come from CLI flags with environment fallbacks (see
//! [`crate::cli::Cli`]); this module validates them into a [`ServerConfig`].

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::errors::{AppError, AppResult};
use crate::memegen::client::normalize_base_url;

pub use crate::memegen::client::DEFAULT_MEMEGEN_URL;

pub const DEFAULT_LISTEN: &str = ":5020";
pub const DEFAULT_LOG: &str = "stdout";
pub const DEFAULT_IMAGE_WIDTH: &str = "250";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stdout,
    None,
    Syslog,
    File(PathBuf),
}

impl FromStr for LogDestination {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(AppError::invalid_config_value("logfile", value)),
            "stdout" => Ok(Self::Stdout),
            "none" => Ok(Self::None),
            "syslog" => Ok(Self::Syslog),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

/// Validated service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub log: LogDestination,
    pub image_width: Option<u32>,
    pub memegen_url: Url,
    /// Read for parity with slash-command setups; not enforced.
    pub token: Option<String>,
}

impl ServerConfig {
    /// Validate raw flag/environment values into a config
    pub fn new(
        listen: &str,
        logfile: &str,
        image_width: &str,
        memegen_url: &str,
        token: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            listen: parse_listen_addr(listen)?,
            log: logfile.parse()?,
            image_width: parse_image_width(image_width)?,
            memegen_url: normalize_base_url(memegen_url)?,
            token: token.filter(|t| !t.is_empty()),
        })
    }
}

/// Parse a listen address. A bare `:port` listens on all interfaces.
pub fn parse_listen_addr(value: &str) -> AppResult<SocketAddr> {
    let value = value.trim();
    let candidate = if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value.to_string()
    };

    if let Ok(addr) = candidate.parse::<SocketAddr>() {
        return Ok(addr);
    }

    candidate
        .to_socket_addrs()
        .map_err(|e| AppError::invalid_config_value_with_source("listen", value, e))?
        .next()
        .ok_or_else(|| AppError::invalid_config_value("listen", value))
}

/// Parse the image display width. Empty disables the width suffix.
pub fn parse_image_width(value: &str) -> AppResult<Option<u32>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|e| AppError::invalid_config_value_with_source("imgwidth", value, e))
}
