//! Archetype affinity calculation.
//!
//! For a query trait vector, each archetype gets a bounded score:
//!
//! 1. Cosine similarity between query and archetype vectors.
//! 2. Temperature-scaled exponential: `exp(cos / T)`. This is the
//!    numerator of a softmax without the normalizing sum, so the scores
//!    are independent affinities, not a probability distribution.
//! 3. Min-max normalization across the archetype set to [0, 1].
//!
//! Pure and deterministic: no shared mutable state, no memoization, no
//! I/O. Many callers may score against the same catalog concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use crate::archetypes::ArchetypeCatalog;
use crate::error::{AffinityError, Result};
use crate::numeric::{self, EPSILON};
use crate::traits::TraitVector;

/// Default softmax temperature. Lower is sharper (more extreme scores),
/// higher is flatter (more uniform scores).
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

// ============================================================================
// Calculator
// ============================================================================

/// Scores trait vectors against a fixed archetype catalog.
#[derive(Debug, Clone)]
pub struct AffinityCalculator {
    catalog: Arc<ArchetypeCatalog>,
}

impl AffinityCalculator {
    /// Create a calculator over a catalog.
    pub fn new(catalog: Arc<ArchetypeCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog being scored against.
    pub fn catalog(&self) -> &Arc<ArchetypeCatalog> {
        &self.catalog
    }

    /// Score a query vector with the default temperature.
    pub fn calculate(&self, query: &TraitVector) -> Result<AffinityResult> {
        self.calculate_with_temperature(query, DEFAULT_TEMPERATURE)
    }

    /// Score a query vector with an explicit temperature.
    ///
    /// # Errors
    ///
    /// - [`AffinityError::InvalidTemperature`] for a non-positive or NaN
    ///   temperature.
    /// - [`AffinityError::EmptyCatalog`] if the catalog has no entries
    ///   (unreachable for catalogs built through [`ArchetypeCatalog::new`],
    ///   which rejects empties).
    pub fn calculate_with_temperature(
        &self,
        query: &TraitVector,
        temperature: f64,
    ) -> Result<AffinityResult> {
        // `!(t > 0.0)` also catches NaN.
        if !(temperature > 0.0) {
            return Err(AffinityError::InvalidTemperature(temperature));
        }
        if self.catalog.is_empty() {
            return Err(AffinityError::EmptyCatalog);
        }

        let weights: Vec<f64> = self
            .catalog
            .iter()
            .map(|archetype| {
                let cos = numeric::cosine_similarity(
                    query.components(),
                    archetype.vector.components(),
                );
                (cos / temperature).exp()
            })
            .collect();

        let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let entries = if max - min < EPSILON {
            // Every archetype is equally similar: min-max would divide by
            // near-zero, so every score is the designed midpoint.
            self.catalog
                .iter()
                .map(|a| (a.code.clone(), 0.5))
                .collect()
        } else {
            self.catalog
                .iter()
                .zip(&weights)
                .map(|(a, w)| (a.code.clone(), (w - min) / (max - min)))
                .collect()
        };

        Ok(AffinityResult { entries })
    }
}

impl Default for AffinityCalculator {
    /// Calculator over the builtin archetype catalog.
    fn default() -> Self {
        Self::new(ArchetypeCatalog::builtin())
    }
}

// ============================================================================
// Result
// ============================================================================

/// Per-archetype affinity scores in [0, 1].
///
/// Scores do not sum to 1; they are independent affinities. Entries keep
/// catalog iteration order so [`top_n`](Self::top_n) tie-breaks are
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityResult {
    entries: Vec<(String, f64)>,
}

impl AffinityResult {
    /// Score for one archetype.
    ///
    /// # Errors
    ///
    /// [`AffinityError::UnknownArchetype`] if the code was not scored.
    pub fn score_of(&self, code: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, s)| *s)
            .ok_or_else(|| AffinityError::UnknownArchetype(code.to_string()))
    }

    /// Scores as a `code -> score` mapping.
    pub fn as_mapping(&self) -> HashMap<String, f64> {
        self.entries.iter().cloned().collect()
    }

    /// Top `n` archetype/score pairs by score descending.
    ///
    /// `None` returns all pairs. The sort is stable, so ties keep catalog
    /// iteration order.
    pub fn top_n(&self, n: Option<usize>) -> Vec<(String, f64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some(n) = n {
            sorted.truncate(n);
        }
        sorted
    }

    /// Entries in catalog iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, s)| (c.as_str(), *s))
    }

    /// Number of scored archetypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetypes::Archetype;
    use std::collections::HashMap as Map;

    fn vec_of(o: f64, c: f64, e: f64, a: f64, n: f64) -> TraitVector {
        TraitVector::build(&Map::from([
            ("O".to_string(), o),
            ("C".to_string(), c),
            ("E".to_string(), e),
            ("A".to_string(), a),
            ("N".to_string(), n),
        ]))
        .unwrap()
    }

    fn sample_catalog() -> Arc<ArchetypeCatalog> {
        Arc::new(
            ArchetypeCatalog::new(vec![
                Archetype::new("ANALYST", "The Analyst", "", vec_of(0.7, 0.9, 0.3, 0.4, 0.2)),
                Archetype::new("SOCIALITE", "The Socialite", "", vec_of(0.6, 0.4, 0.9, 0.8, 0.3)),
                Archetype::new("INNOVATOR", "The Innovator", "", vec_of(0.95, 0.5, 0.6, 0.5, 0.4)),
            ])
            .unwrap(),
        )
    }

    fn variance(scores: &[f64]) -> f64 {
        let m = scores.iter().sum::<f64>() / scores.len() as f64;
        scores.iter().map(|s| (s - m) * (s - m)).sum::<f64>() / scores.len() as f64
    }

    #[test]
    fn test_calculate_covers_every_archetype() {
        let calc = AffinityCalculator::new(sample_catalog());
        let result = calc.calculate(&vec_of(0.8, 0.6, 0.5, 0.7, 0.3)).unwrap();
        assert_eq!(result.len(), 3);
        for code in ["ANALYST", "SOCIALITE", "INNOVATOR"] {
            assert!(result.score_of(code).is_ok());
        }
        assert!(result.score_of("NOBODY").is_err());
    }

    #[test]
    fn test_scores_bounded() {
        let calc = AffinityCalculator::new(sample_catalog());
        for query in [
            vec_of(0.5, 0.5, 0.5, 0.5, 0.5),
            vec_of(0.0, 0.0, 0.0, 0.0, 0.0),
            vec_of(1.0, 1.0, 1.0, 1.0, 1.0),
            vec_of(0.8, 0.6, 0.5, 0.7, 0.3),
        ] {
            let result = calc.calculate(&query).unwrap();
            for (_, score) in result.iter() {
                assert!((0.0..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_exact_archetype_match_ranks_first() {
        let calc = AffinityCalculator::new(sample_catalog());
        let query = vec_of(0.7, 0.9, 0.3, 0.4, 0.2); // the ANALYST vector
        let result = calc.calculate(&query).unwrap();
        let top = result.top_n(Some(1));
        assert_eq!(top[0].0, "ANALYST");
        assert!((top[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_leaning_social_query_puts_socialite_in_top_two() {
        let calc = AffinityCalculator::new(sample_catalog());
        let query = vec_of(0.8, 0.6, 0.5, 0.7, 0.3);
        let result = calc.calculate_with_temperature(&query, 0.3).unwrap();
        let top2 = result.top_n(Some(2));
        assert!(top2.iter().any(|(code, _)| code == "SOCIALITE"));
    }

    #[test]
    fn test_identical_similarities_yield_midpoint_scores() {
        // Distinct codes, identical vectors: every cosine ties, min-max
        // would divide by near-zero, so every score is exactly 0.5.
        let same = vec_of(0.6, 0.6, 0.6, 0.6, 0.6);
        let catalog = ArchetypeCatalog::new(vec![
            Archetype::new("FIRST", "First", "", same.clone()),
            Archetype::new("SECOND", "Second", "", same.clone()),
            Archetype::new("THIRD", "Third", "", same),
        ])
        .unwrap();
        let calc = AffinityCalculator::new(Arc::new(catalog));
        let result = calc.calculate(&vec_of(0.2, 0.8, 0.4, 0.9, 0.1)).unwrap();
        for (_, score) in result.iter() {
            assert_eq!(score, 0.5);
        }
    }

    #[test]
    fn test_lower_temperature_sharpens_scores() {
        let calc = AffinityCalculator::new(sample_catalog());
        let query = vec_of(0.8, 0.6, 0.5, 0.7, 0.3);
        let sharp: Vec<f64> = calc
            .calculate_with_temperature(&query, 0.1)
            .unwrap()
            .iter()
            .map(|(_, s)| s)
            .collect();
        let flat: Vec<f64> = calc
            .calculate_with_temperature(&query, 1.0)
            .unwrap()
            .iter()
            .map(|(_, s)| s)
            .collect();
        assert!(variance(&sharp) > variance(&flat));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let calc = AffinityCalculator::new(sample_catalog());
        let query = vec_of(0.5, 0.5, 0.5, 0.5, 0.5);
        for t in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                calc.calculate_with_temperature(&query, t).unwrap_err(),
                AffinityError::InvalidTemperature(_)
            ));
        }
    }

    #[test]
    fn test_top_n_counts_and_ordering() {
        let calc = AffinityCalculator::new(sample_catalog());
        let result = calc.calculate(&vec_of(0.8, 0.6, 0.5, 0.7, 0.3)).unwrap();

        let all = result.top_n(None);
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].1 >= w[1].1));

        assert_eq!(result.top_n(Some(2)).len(), 2);
        // Asking for more than the catalog holds returns everything.
        assert_eq!(result.top_n(Some(10)).len(), 3);
        assert!(result.top_n(Some(0)).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_catalog_order() {
        let same = vec_of(0.3, 0.3, 0.3, 0.3, 0.3);
        let catalog = ArchetypeCatalog::new(vec![
            Archetype::new("ALPHA", "Alpha", "", same.clone()),
            Archetype::new("BETA", "Beta", "", same),
            Archetype::new("GAMMA", "Gamma", "", vec_of(0.9, 0.1, 0.9, 0.1, 0.9)),
        ])
        .unwrap();
        let calc = AffinityCalculator::new(Arc::new(catalog));
        let result = calc.calculate(&vec_of(0.5, 0.5, 0.5, 0.5, 0.5)).unwrap();
        // ALPHA and BETA tie exactly; the stable sort keeps ALPHA first.
        let top = result.top_n(None);
        let alpha_pos = top.iter().position(|(c, _)| c == "ALPHA").unwrap();
        let beta_pos = top.iter().position(|(c, _)| c == "BETA").unwrap();
        assert!(alpha_pos < beta_pos);
    }

    #[test]
    fn test_default_calculator_uses_builtin_catalog() {
        let calc = AffinityCalculator::default();
        let result = calc.calculate(&vec_of(0.8, 0.6, 0.5, 0.7, 0.3)).unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(result.as_mapping().len(), 8);
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let calc = AffinityCalculator::new(sample_catalog());
        let query = vec_of(0.8, 0.6, 0.5, 0.7, 0.3);
        let a = calc.calculate(&query).unwrap();
        let b = calc.calculate(&query).unwrap();
        assert_eq!(a, b);
    }
}
