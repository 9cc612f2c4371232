//! N-dimensional trait vectors.
//!
//! A [`TraitVector`] is a persona's (or a query's) position in trait
//! space: one value per active trait, each in [0.0, 1.0], stored in the
//! catalog's canonical order. Built once from a `code -> value` mapping
//! and immutable thereafter. Persistence is a caller concern.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{AffinityError, Result};
use crate::numeric;
use crate::traits::catalog::TraitCatalog;

/// A point in N-dimensional trait space.
#[derive(Debug, Clone, Serialize)]
pub struct TraitVector {
    #[serde(skip)]
    catalog: Arc<TraitCatalog>,
    values: Vec<f64>,
}

impl TraitVector {
    /// Build a vector against the active catalog.
    ///
    /// Every active trait code must have an entry; unrecognized extra
    /// codes are ignored (schema drift tolerance), though their values
    /// are still range-checked.
    ///
    /// # Errors
    ///
    /// - [`AffinityError::MissingTrait`] if an active code has no entry.
    /// - [`AffinityError::OutOfRange`] if any supplied value is outside
    ///   [0.0, 1.0].
    pub fn build(values: &HashMap<String, f64>) -> Result<Self> {
        Self::build_with(TraitCatalog::active(), values)
    }

    /// Build a vector against an explicit catalog.
    pub fn build_with(catalog: Arc<TraitCatalog>, values: &HashMap<String, f64>) -> Result<Self> {
        for code in catalog.codes() {
            if !values.contains_key(code) {
                return Err(AffinityError::MissingTrait {
                    code: code.to_string(),
                    required: catalog.code_list(),
                });
            }
        }

        // Range-check recognized codes in canonical order first so the
        // reported violation is deterministic, then any extras.
        for code in catalog.codes() {
            let value = values[code];
            if !(0.0..=1.0).contains(&value) {
                return Err(AffinityError::OutOfRange {
                    code: code.to_string(),
                    value,
                });
            }
        }
        for (code, value) in values {
            if !catalog.contains(code) && !(0.0..=1.0).contains(value) {
                return Err(AffinityError::OutOfRange {
                    code: code.clone(),
                    value: *value,
                });
            }
        }

        let components = catalog.codes().map(|code| values[code]).collect();
        Ok(Self {
            catalog,
            values: components,
        })
    }

    /// The catalog this vector was built against.
    pub fn catalog(&self) -> &Arc<TraitCatalog> {
        &self.catalog
    }

    /// Components in canonical catalog order.
    pub fn components(&self) -> &[f64] {
        &self.values
    }

    /// Dimensionality of the vector.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Euclidean (L2) distance to another vector of the same catalog.
    ///
    /// Symmetric, and zero iff the vectors are componentwise equal.
    pub fn euclidean_distance(&self, other: &TraitVector) -> f64 {
        debug_assert_eq!(self.values.len(), other.values.len());
        numeric::euclidean(&self.values, &other.values)
    }

    /// Value of a single trait.
    ///
    /// # Errors
    ///
    /// [`AffinityError::UnknownTrait`] if the code is not active.
    pub fn value_of(&self, code: &str) -> Result<f64> {
        match self.catalog.index_of(code) {
            Some(i) => Ok(self.values[i]),
            None => Err(AffinityError::UnknownTrait {
                code: code.to_string(),
                valid: self.catalog.code_list(),
            }),
        }
    }

    /// Exact round trip of the values used to build the vector.
    pub fn as_mapping(&self) -> HashMap<String, f64> {
        self.catalog
            .codes()
            .zip(&self.values)
            .map(|(code, value)| (code.to_string(), *value))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
