//! Trait space: the ordered catalog of active personality dimensions and
//! the vectors that live in it.
//!
//! The catalog defines the dimensionality `N` and the canonical index
//! order once; every vector, archetype, and calculator in the crate
//! operates on "however many traits are active" and never hard-codes `N`.

pub mod catalog;
pub mod vector;

pub use catalog::{Trait, TraitCatalog, TraitCategory};
pub use vector::TraitVector;
