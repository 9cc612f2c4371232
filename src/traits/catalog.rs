//! Trait definitions and the active-trait catalog.
//!
//! A [`Trait`] is an immutable value object describing one personality
//! dimension. The [`TraitCatalog`] is the single source of truth for
//! which traits are active and in what order; extending it is a data
//! change and requires no edits to the vector or calculator code.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Trait
// ============================================================================

/// Category a trait belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Psychological,
    Social,
    Economic,
}

/// A single personality dimension.
///
/// Immutable after construction; no setters are exposed. The `low_label`
/// and `high_label` describe the two poles of the dimension for UI use
/// (e.g. Openness: "Conventional" vs "Creative").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    /// Short unique code (e.g. "O", "C", "E", "A", "N").
    pub code: String,
    /// Full name (e.g. "Openness").
    pub name: String,
    /// What this dimension measures.
    pub description: String,
    /// Label for low values (e.g. "Conventional").
    pub low_label: String,
    /// Label for high values (e.g. "Creative").
    pub high_label: String,
    /// Category of the trait.
    pub category: TraitCategory,
}

impl Trait {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        low_label: impl Into<String>,
        high_label: impl Into<String>,
        category: TraitCategory,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            low_label: low_label.into(),
            high_label: high_label.into(),
            category,
        }
    }
}

// ============================================================================
// Trait catalog
// ============================================================================

/// The ordered set of active traits.
///
/// Defines the dimensionality `N` and the canonical index order used by
/// every [`TraitVector`](super::TraitVector). Stable for the lifetime of
/// the process: the builtin catalog lives behind a lazy static and custom
/// catalogs are immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitCatalog {
    traits: Vec<Trait>,
}

static ACTIVE: Lazy<Arc<TraitCatalog>> = Lazy::new(|| Arc::new(TraitCatalog::ocean()));

impl TraitCatalog {
    /// Build a catalog from an ordered list of traits.
    ///
    /// Duplicate codes are dropped, keeping the first occurrence, so the
    /// canonical order is always the order of first appearance.
    pub fn new(traits: Vec<Trait>) -> Self {
        let mut seen: Vec<&str> = Vec::with_capacity(traits.len());
        let mut deduped = Vec::with_capacity(traits.len());
        for t in &traits {
            if !seen.contains(&t.code.as_str()) {
                seen.push(&t.code);
                deduped.push(t.clone());
            }
        }
        Self { traits: deduped }
    }

    /// The active catalog shared across the process: the OCEAN five.
    pub fn active() -> Arc<TraitCatalog> {
        Arc::clone(&ACTIVE)
    }

    /// The Big Five (OCEAN) catalog in O-C-E-A-N order.
    ///
    /// Future catalog revisions add social and economic traits here;
    /// nothing downstream hard-codes the count.
    pub fn ocean() -> Self {
        Self::new(vec![
            Trait::new(
                "O",
                "Openness",
                "Openness to experience, imagination, and new ideas",
                "Conventional",
                "Creative",
                TraitCategory::Psychological,
            ),
            Trait::new(
                "C",
                "Conscientiousness",
                "Organization, dependability, and self-discipline",
                "Spontaneous",
                "Disciplined",
                TraitCategory::Psychological,
            ),
            Trait::new(
                "E",
                "Extraversion",
                "Sociability, assertiveness, and energy level",
                "Reserved",
                "Outgoing",
                TraitCategory::Psychological,
            ),
            Trait::new(
                "A",
                "Agreeableness",
                "Compassion, cooperation, and trust in others",
                "Skeptical",
                "Trusting",
                TraitCategory::Psychological,
            ),
            Trait::new(
                "N",
                "Neuroticism",
                "Emotional stability and tendency toward negative emotions",
                "Stable",
                "Anxious",
                TraitCategory::Psychological,
            ),
        ])
    }

    /// Active traits in canonical order.
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    /// Trait codes in canonical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|t| t.code.as_str())
    }

    /// Number of active traits (the dimensionality `N`).
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Canonical index of a trait code, if active.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.traits.iter().position(|t| t.code == code)
    }

    /// Whether a code names an active trait.
    pub fn contains(&self, code: &str) -> bool {
        self.index_of(code).is_some()
    }

    /// Lookup a trait by code.
    pub fn get(&self, code: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.code == code)
    }

    /// Comma-joined code list for error messages.
    pub(crate) fn code_list(&self) -> String {
        self.codes().collect::<Vec<_>>().join(", ")
    }
}

// ============================================================================
// Tests
// ============================================================================
