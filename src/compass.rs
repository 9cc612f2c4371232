//! Two-dimensional compass variant.
//!
//! The political-compass special case of the affinity family: labeled
//! points on the unit square, raw Euclidean distance to a query
//! position, affinity by inversion (`max_distance - distance`), and
//! sum-normalization so the affinities form a probability distribution.
//!
//! This is deliberately distinct from the N-dimensional
//! [`AffinityCalculator`](crate::affinity::AffinityCalculator), which
//! produces independent min-max scores that need not sum to 1. Both
//! normalization policies have call sites; neither replaces the other.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AffinityError, Result};
use crate::numeric::EPSILON;

// ============================================================================
// Compass points
// ============================================================================

/// A labeled reference position on the unit square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl CompassPoint {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    /// Euclidean distance from this point to a query position.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((x - self.x) * (x - self.x) + (y - self.y) * (y - self.y)).sqrt()
    }
}

/// A parsed compass point-set document, e.g. `{"points": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompassDocument {
    pub points: Vec<CompassPoint>,
}

impl CompassDocument {
    /// Parse a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(text)?;
        debug!(points = doc.points.len(), "parsed compass point document");
        Ok(doc)
    }

    /// Validate the points into a [`Compass`].
    pub fn into_compass(self) -> Result<Compass> {
        Compass::new(self.points)
    }
}

// ============================================================================
// Compass
// ============================================================================

/// A fixed set of labeled points on the unit square.
#[derive(Debug, Clone)]
pub struct Compass {
    points: Vec<CompassPoint>,
}

impl Compass {
    /// Build a compass from labeled points.
    ///
    /// # Errors
    ///
    /// - [`AffinityError::EmptyCatalog`] for an empty point set.
    /// - [`AffinityError::DuplicateEntry`] for a repeated label.
    /// - [`AffinityError::OutOfRange`] for a coordinate outside [0, 1].
    pub fn new(points: Vec<CompassPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(AffinityError::EmptyCatalog);
        }
        for (i, point) in points.iter().enumerate() {
            for coord in [point.x, point.y] {
                if !(0.0..=1.0).contains(&coord) {
                    return Err(AffinityError::OutOfRange {
                        code: point.label.clone(),
                        value: coord,
                    });
                }
            }
            if points[..i].iter().any(|p| p.label == point.label) {
                return Err(AffinityError::DuplicateEntry(point.label.clone()));
            }
        }
        Ok(Self { points })
    }

    /// The labeled points, in insertion order.
    pub fn points(&self) -> &[CompassPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw Euclidean distance from the query to every point, in point
    /// order. Feeds distance tables and bar charts directly.
    pub fn distances(&self, x: f64, y: f64) -> Vec<(String, f64)> {
        self.points
            .iter()
            .map(|p| (p.label.clone(), p.distance_to(x, y)))
            .collect()
    }

    /// Affinity of the query to every point, as a distribution.
    ///
    /// Each distance is inverted against the farthest point and the
    /// inverted distances are divided by their sum, so the affinities
    /// sum to 1. When the query is equidistant from every point, every
    /// inverted distance is zero; the result is then the uniform
    /// distribution instead of a division by zero.
    pub fn affinities(&self, x: f64, y: f64) -> HashMap<String, f64> {
        let distances = self.distances(x, y);
        let max = distances
            .iter()
            .map(|(_, d)| *d)
            .fold(f64::NEG_INFINITY, f64::max);

        let inverted: Vec<f64> = distances.iter().map(|(_, d)| max - d).collect();
        let total: f64 = inverted.iter().sum();

        if total < EPSILON {
            let uniform = 1.0 / self.points.len() as f64;
            return distances
                .into_iter()
                .map(|(label, _)| (label, uniform))
                .collect();
        }

        distances
            .into_iter()
            .zip(inverted)
            .map(|((label, _), inv)| (label, inv / total))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
