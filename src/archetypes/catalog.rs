//! Archetype definitions and the read-only archetype catalog.
//!
//! Archetypes are reference points in trait space. The builtin catalog
//! carries eight types spanning the Big Five spectrum; custom catalogs
//! can be built directly or parsed from a document
//! (see [`document`](super::document)).

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{AffinityError, Result};
use crate::traits::TraitVector;

// ============================================================================
// Archetype
// ============================================================================

/// An idealized personality type: a named reference trait vector.
#[derive(Debug, Clone, Serialize)]
pub struct Archetype {
    /// Unique identifier (e.g. "ANALYST").
    pub code: String,
    /// Human-readable name (e.g. "The Analyst").
    pub name: String,
    /// What this archetype represents.
    pub description: String,
    /// Reference position in trait space.
    pub vector: TraitVector,
}

impl Archetype {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        vector: TraitVector,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            vector,
        }
    }
}

// ============================================================================
// Archetype catalog
// ============================================================================

/// A fixed, read-only set of archetypes.
///
/// Defined once at process start and shared by reference; the affinity
/// calculator never mutates it, so concurrent scoring needs no locking.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
    index: HashMap<String, usize>,
}

static BUILTIN: Lazy<Arc<ArchetypeCatalog>> = Lazy::new(|| {
    Arc::new(builtin_catalog().expect("builtin archetype catalog is valid"))
});

impl ArchetypeCatalog {
    /// Build a catalog from a list of archetypes.
    ///
    /// # Errors
    ///
    /// - [`AffinityError::EmptyCatalog`] for an empty list.
    /// - [`AffinityError::DuplicateEntry`] for a repeated code.
    /// - [`AffinityError::DimensionMismatch`] if an archetype vector has
    ///   a different dimensionality than the first entry.
    pub fn new(archetypes: Vec<Archetype>) -> Result<Self> {
        if archetypes.is_empty() {
            return Err(AffinityError::EmptyCatalog);
        }

        let dims = archetypes[0].vector.len();
        let mut index = HashMap::with_capacity(archetypes.len());
        for (i, archetype) in archetypes.iter().enumerate() {
            if archetype.vector.len() != dims {
                return Err(AffinityError::DimensionMismatch {
                    code: archetype.code.clone(),
                    expected: dims,
                    actual: archetype.vector.len(),
                });
            }
            if index.insert(archetype.code.clone(), i).is_some() {
                return Err(AffinityError::DuplicateEntry(archetype.code.clone()));
            }
        }

        Ok(Self { archetypes, index })
    }

    /// The builtin eight-archetype catalog, shared across the process.
    pub fn builtin() -> Arc<ArchetypeCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Lookup an archetype by code.
    ///
    /// # Errors
    ///
    /// [`AffinityError::UnknownArchetype`] if the code is absent.
    pub fn get(&self, code: &str) -> Result<&Archetype> {
        self.index
            .get(code)
            .map(|&i| &self.archetypes[i])
            .ok_or_else(|| AffinityError::UnknownArchetype(code.to_string()))
    }

    /// All archetypes as a defensive copy, in insertion order.
    pub fn all(&self) -> Vec<Archetype> {
        self.archetypes.clone()
    }

    /// Iterate archetypes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    /// Number of archetypes.
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

// ============================================================================
// Builtin archetypes
// ============================================================================

fn builtin_catalog() -> Result<ArchetypeCatalog> {
    let ocean = |o: f64, c: f64, e: f64, a: f64, n: f64| -> Result<TraitVector> {
        TraitVector::build(&HashMap::from([
            ("O".to_string(), o),
            ("C".to_string(), c),
            ("E".to_string(), e),
            ("A".to_string(), a),
            ("N".to_string(), n),
        ]))
    };

    ArchetypeCatalog::new(vec![
        Archetype::new(
            "ANALYST",
            "The Analyst",
            "Logical, detail-oriented, and methodical. Values data over intuition. \
             Prefers structure and evidence-based decision making. \
             Introverted and somewhat skeptical of others.",
            ocean(0.65, 0.90, 0.25, 0.35, 0.20)?,
        ),
        Archetype::new(
            "SOCIALITE",
            "The Socialite",
            "Outgoing, warm, and people-oriented. Thrives in social settings. \
             Values relationships and harmony over logic. \
             Optimistic and emotionally expressive.",
            ocean(0.60, 0.40, 0.90, 0.85, 0.30)?,
        ),
        Archetype::new(
            "INNOVATOR",
            "The Innovator",
            "Creative, visionary, and unconventional. Challenges status quo. \
             Values imagination and new possibilities over tradition. \
             Independent thinker with high tolerance for ambiguity.",
            ocean(0.95, 0.45, 0.60, 0.50, 0.40)?,
        ),
        Archetype::new(
            "ACTIVIST",
            "The Activist",
            "Passionate, principled, and driven by values. \
             Fights for social justice and positive change. \
             Emotionally engaged with strong moral convictions.",
            ocean(0.80, 0.55, 0.70, 0.85, 0.55)?,
        ),
        Archetype::new(
            "PRAGMATIST",
            "The Pragmatist",
            "Practical, realistic, and results-focused. \
             Values what works over ideology or theory. \
             Balanced, adaptable, and grounded in reality.",
            ocean(0.50, 0.70, 0.55, 0.60, 0.25)?,
        ),
        Archetype::new(
            "TRADITIONALIST",
            "The Traditionalist",
            "Values heritage, stability, and established norms. \
             Respects authority and proven methods. \
             Conscientious and duty-oriented with strong moral code.",
            ocean(0.25, 0.85, 0.45, 0.70, 0.35)?,
        ),
        Archetype::new(
            "SKEPTIC",
            "The Skeptic",
            "Questioning, analytical, and cautious. \
             Demands evidence and challenges assumptions. \
             Independent thinker who resists groupthink.",
            ocean(0.70, 0.65, 0.40, 0.30, 0.45)?,
        ),
        Archetype::new(
            "OPTIMIST",
            "The Optimist",
            "Positive, hopeful, and enthusiastic. \
             Sees opportunities where others see obstacles. \
             Emotionally resilient and uplifting to others.",
            ocean(0.75, 0.60, 0.80, 0.80, 0.15)?,
        ),
    ])
}

// ============================================================================
// Tests
// ============================================================================
