//! Affinity scoring: bounded per-archetype scores for a trait vector.

pub mod calculator;

pub use calculator::{AffinityCalculator, AffinityResult, DEFAULT_TEMPERATURE};
