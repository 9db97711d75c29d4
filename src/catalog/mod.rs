//! Connector catalog
//!
//! Holds the list of connector definitions a user may pick from. Every
//! content change assigns the catalog a fresh revision, which derived state
//! (option lists, selection lookups) uses as its cache key.

mod definition;
pub mod loader;
mod release_stage;

pub use definition::ConnectorDefinition;
pub use loader::{CatalogError, CatalogLoader};
pub use release_stage::ReleaseStage;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Ordered collection of connector definitions
///
/// Revisions are unique across all catalogs in the process, so two distinct
/// catalogs never share a cache key.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<ConnectorDefinition>,
    revision: u64,
}

impl Catalog {
    pub fn new(definitions: Vec<ConnectorDefinition>) -> Self {
        Self {
            definitions,
            revision: next_revision(),
        }
    }

    /// Replace the catalog content and bump the revision
    pub fn replace(&mut self, definitions: Vec<ConnectorDefinition>) {
        self.definitions = definitions;
        self.revision = next_revision();
        tracing::debug!(
            revision = self.revision,
            count = self.definitions.len(),
            "Catalog replaced"
        );
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn definitions(&self) -> &[ConnectorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Position of the first definition with the given id
    ///
    /// Duplicate ids resolve to the earliest entry.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.definitions.iter().position(|def| def.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&ConnectorDefinition> {
        self.definitions.get(index)
    }

    /// First definition with the given id
    pub fn find(&self, id: &str) -> Option<&ConnectorDefinition> {
        self.position(id).and_then(|idx| self.get(idx))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ConnectorDefinition>> for Catalog {
    fn from(definitions: Vec<ConnectorDefinition>) -> Self {
        Self::new(definitions)
    }
}
