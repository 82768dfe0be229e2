use crate::errors::{AppError, AppResult};
use crate::memegen::Catalog;

/// Slug memegen uses for an arbitrary background image
pub const CUSTOM_SLUG: &str = "custom";

const IMAGE_URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Template reference resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub slug: String,
    /// Background image for the `custom` slug
    pub override_url: Option<String>,
}

/// Whether a template reference is a direct image URL
pub fn is_image_url(reference: &str) -> bool {
    IMAGE_URL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Resolve a template reference.
///
/// Image URLs resolve to the `custom` slug with the URL as override. Anything
/// else must be an exact, case-sensitive catalog name.
pub fn resolve_template(reference: &str, catalog: &Catalog) -> AppResult<ResolvedTemplate> {
    if is_image_url(reference) {
        return Ok(ResolvedTemplate {
            slug: CUSTOM_SLUG.to_string(),
            override_url: Some(reference.to_string()),
        });
    }

    if catalog.contains(reference) {
        return Ok(ResolvedTemplate {
            slug: reference.to_string(),
            override_url: None,
        });
    }

    Err(AppError::template_not_found(reference))
}
