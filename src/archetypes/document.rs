//! Catalog documents: structured descriptions of archetype sets.
//!
//! The process loads its archetype catalog once at startup from a YAML
//! or JSON document listing each archetype's name and per-trait
//! reference values. This module parses and validates such documents
//! into an [`ArchetypeCatalog`]; fetching the document (file, database,
//! config service) is the caller's concern.
//!
//! ```yaml
//! archetypes:
//!   - code: ANALYST
//!     name: The Analyst
//!     description: Logical and detail-oriented.
//!     traits: { O: 0.65, C: 0.90, E: 0.25, A: 0.35, N: 0.20 }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::archetypes::catalog::{Archetype, ArchetypeCatalog};
use crate::error::Result;
use crate::traits::{TraitCatalog, TraitVector};

/// One archetype entry in a catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Trait code to reference value, e.g. `{ "O": 0.65, ... }`.
    pub traits: HashMap<String, f64>,
}

/// A parsed archetype catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeDocument {
    pub archetypes: Vec<ArchetypeEntry>,
}

impl ArchetypeDocument {
    /// Parse a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let doc: Self = serde_yaml::from_str(text)?;
        debug!(archetypes = doc.archetypes.len(), "parsed YAML archetype document");
        Ok(doc)
    }

    /// Parse a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(text)?;
        debug!(archetypes = doc.archetypes.len(), "parsed JSON archetype document");
        Ok(doc)
    }

    /// Validate the entries against the active trait catalog.
    pub fn into_catalog(self) -> Result<ArchetypeCatalog> {
        self.into_catalog_with(TraitCatalog::active())
    }

    /// Validate the entries against an explicit trait catalog.
    ///
    /// Each entry's trait mapping goes through the same construction
    /// rules as a directly built vector: missing active traits and
    /// out-of-range values fail with the corresponding errors.
    pub fn into_catalog_with(self, traits: Arc<TraitCatalog>) -> Result<ArchetypeCatalog> {
        let mut archetypes = Vec::with_capacity(self.archetypes.len());
        for entry in self.archetypes {
            let vector = TraitVector::build_with(Arc::clone(&traits), &entry.traits)?;
            archetypes.push(Archetype::new(entry.code, entry.name, entry.description, vector));
        }
        ArchetypeCatalog::new(archetypes)
    }
}

// ============================================================================
// Tests
// ============================================================================
