//! # persona-affinity
//!
//! Personality-affinity engine: represents a persona (or a 2-D compass
//! click) as a point in N-dimensional trait space, compares it against a
//! fixed catalog of reference archetypes, and produces a bounded affinity
//! score per archetype.
//!
//! Two scoring families live here on purpose:
//!
//! - [`AffinityCalculator`]: cosine similarity, temperature-scaled
//!   exponential, min-max normalization. Scores are independent
//!   affinities in [0, 1] that need not sum to 1.
//! - [`Compass`]: the 2-D special case. Raw Euclidean distance, affinity
//!   by inversion, sum-normalized to a probability distribution.
//!
//! The engine is dimension-agnostic (traits are a catalog-level data
//! change), numerically stable at the boundaries (zero vectors,
//! identical vectors, degenerate similarity sets), and deterministic.
//! Every operation is a pure function over immutable inputs: no I/O, no
//! shared mutable state, no caching. HTTP routing, persistence, LLM
//! calls, and chart rendering are caller concerns.

pub mod affinity;
pub mod archetypes;
pub mod compass;
pub mod error;
pub mod numeric;
pub mod traits;

pub use affinity::{AffinityCalculator, AffinityResult, DEFAULT_TEMPERATURE};
pub use archetypes::{Archetype, ArchetypeCatalog, ArchetypeDocument, DiversityStats};
pub use compass::{Compass, CompassDocument, CompassPoint};
pub use error::{AffinityError, Result};
pub use traits::{Trait, TraitCatalog, TraitCategory, TraitVector};

/// Library version.
pub const VERSION: &str = "0.3.0";
