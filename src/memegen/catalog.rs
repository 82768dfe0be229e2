//! Template catalog and its process-wide cache
//!
//! The catalog is built once from the remote listing and then shared by every
//! request. It is only ever replaced wholesale, never edited in place.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::traits::MemegenApi;
use crate::errors::AppResult;

/// One known template: short name (catalog key) and human description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub description: String,
}

/// Known templates, sorted ascending by name with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// Build a catalog from the remote `description -> template url` listing.
    ///
    /// The entry name is the last `/`-delimited segment of the value. Values
    /// without a `/` (or with nothing after the last one) are dropped. When two
    /// values end in the same segment, the one under the later key wins.
    pub fn from_listing(listing: &BTreeMap<String, String>) -> Self {
        let mut by_name: BTreeMap<String, String> = BTreeMap::new();

        for (description, template_url) in listing {
            let Some((_, name)) = template_url.rsplit_once('/') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            by_name.insert(name.to_string(), description.clone());
        }

        let entries = by_name
            .into_iter()
            .map(|(name, description)| TemplateEntry { name, description })
            .collect();

        Self { entries }
    }

    /// Build a catalog from entries in any order
    pub fn from_entries(entries: impl IntoIterator<Item = TemplateEntry>) -> Self {
        let mut entries: Vec<TemplateEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries.dedup_by(|later, earlier| later.name == earlier.name);
        Self { entries }
    }

    /// Exact, case-sensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&TemplateEntry> {
        self.entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared cache of the most recently fetched catalog.
///
/// Starts empty, is populated by the first request that needs it and is never
/// expired afterwards. Population is serialised so concurrent first requests
/// issue a single outbound fetch.
#[derive(Debug, Default)]
pub struct CatalogCache {
    current: RwLock<Arc<Catalog>>,
    populate: Mutex<()>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current catalog, possibly empty
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replace the cached catalog wholesale
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let catalog = Arc::new(catalog);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&catalog);
        catalog
    }

    /// Return the cached catalog, fetching it through `api` if it is empty.
    ///
    /// A failed fetch leaves the cache exactly as it was.
    pub async fn get_or_fetch(&self, api: &dyn MemegenApi) -> AppResult<Arc<Catalog>> {
        let current = self.snapshot();
        if !current.is_empty() {
            return Ok(current);
        }

        let _populating = self.populate.lock().await;

        // Another request may have filled the cache while we waited.
        let current = self.snapshot();
        if !current.is_empty() {
            debug!("Catalog populated by a concurrent request");
            return Ok(current);
        }

        let fetched = api.fetch_catalog().await?;
        info!(templates = fetched.len(), "Template catalog cached");
        Ok(self.replace(fetched))
    }
}
