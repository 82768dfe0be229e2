use async_trait::async_trait;
use url::Url;

use super::catalog::Catalog;
use super::image::ImageRequest;
use crate::errors::AppResult;

/// Interface to the remote meme rendering service
#[async_trait]
pub trait MemegenApi: Send + Sync {
    /// Fetch and parse the remote template listing
    async fn fetch_catalog(&self) -> AppResult<Catalog>;

    /// Base URL that image paths are built on
    fn base_url(&self) -> &Url;

    /// Build the rendered image URL for a request
    fn image_url(&self, request: &ImageRequest) -> AppResult<Url> {
        request.to_url(self.base_url())
    }
}
