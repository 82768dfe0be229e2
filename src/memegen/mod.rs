//! Memegen service integration
//!
//! memebot treats the memegen HTTP API as an opaque collaborator with two
//! uses: the template listing, which is fetched and cached, and image URLs,
//! which are only constructed and handed to the chat client.
//!
//! ## Architecture
//!
//! - **MemegenClient**: reqwest-backed implementation of [`MemegenApi`]
//! - **CatalogCache**: owned, shared cache of the fetched template catalog
//! - **ImageRequest**: everything needed to build a rendered image URL

pub mod catalog;
pub mod client;
pub mod image;
pub mod traits;

pub use catalog::{Catalog, CatalogCache, TemplateEntry};
pub use client::{MemegenClient, MemegenClientConfig};
pub use image::ImageRequest;
pub use traits::MemegenApi;
