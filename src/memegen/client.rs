use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

use super::catalog::Catalog;
use super::traits::MemegenApi;
use crate::errors::{AppError, AppResult};

/// Public memegen instance used when nothing else is configured
pub const DEFAULT_MEMEGEN_URL: &str = "https://memegen.link/";

/// Template listing endpoint, relative to the base URL
const TEMPLATES_PATH: &str = "api/templates/";

/// Configuration for the memegen client
#[derive(Debug, Clone)]
pub struct MemegenClientConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for MemegenClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MEMEGEN_URL.to_string(),
            timeout_secs: Some(30),
            user_agent: Some(concat!("memebot/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

/// reqwest-backed memegen client
#[derive(Clone)]
pub struct MemegenClient {
    client: Client,
    base_url: Url,
}

impl MemegenClient {
    /// Create a new client with configuration
    pub fn new(config: MemegenClientConfig) -> AppResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(30));

        let mut client_builder = Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(60))
            .pool_idle_timeout(Duration::from_secs(90));

        if let Some(user_agent) = &config.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        }

        let client = client_builder
            .build()
            .map_err(|e| AppError::config_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, base_url })
    }

    /// URL of the template listing endpoint
    pub fn templates_url(&self) -> AppResult<Url> {
        self.base_url.join(TEMPLATES_PATH).map_err(|e| {
            AppError::invalid_config_value_with_source("memegen-url", self.base_url.as_str(), e)
        })
    }
}

#[async_trait]
impl MemegenApi for MemegenClient {
    async fn fetch_catalog(&self) -> AppResult<Catalog> {
        let url = self.templates_url()?;
        let start = Instant::now();
        debug!(url = %url, "Fetching template listing");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::fetch(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Template listing request failed");
            return Err(AppError::fetch(url.as_str(), format!("HTTP {}", status)));
        }

        let listing: BTreeMap<String, String> = response
            .json()
            .await
            .map_err(|e| AppError::fetch(url.as_str(), e))?;

        let catalog = Catalog::from_listing(&listing);
        info!(
            templates = catalog.len(),
            listed = listing.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched template listing"
        );
        Ok(catalog)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Parse the configured base URL, making sure it ends in `/` so relative
/// joins stay beneath it.
pub fn normalize_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::invalid_config_value_with_source("memegen-url", raw, e))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::invalid_config_value("memegen-url", raw));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
