//! Error types for the affinity engine.
//!
//! Every variant is a fail-fast validation error raised at the point of
//! construction or call. Nothing here is retried or downgraded; the one
//! designed fallback (degenerate normalization in the affinity calculator
//! and the compass) is ordinary behavior, not an error. Callers surface
//! these as 4xx-equivalent failures.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AffinityError>;

/// Errors raised by trait vectors, catalogs, and calculators.
#[derive(Debug, Error)]
pub enum AffinityError {
    /// A required active trait has no supplied value.
    #[error("missing required trait: {code} (required traits: {required})")]
    MissingTrait { code: String, required: String },

    /// A supplied value lies outside the [0.0, 1.0] range.
    #[error("value {value} for {code} must be between 0.0 and 1.0")]
    OutOfRange { code: String, value: f64 },

    /// A trait code is not part of the active catalog.
    #[error("unknown trait code: {code} (valid codes: {valid})")]
    UnknownTrait { code: String, valid: String },

    /// An archetype code is not part of the catalog.
    #[error("unknown archetype code: {0}")]
    UnknownArchetype(String),

    /// A catalog or compass was constructed with no entries.
    #[error("catalog contains no entries")]
    EmptyCatalog,

    /// Two catalog entries share the same code or label.
    #[error("duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    /// An archetype vector does not match the catalog dimensionality.
    #[error("archetype {code} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// The softmax temperature must be strictly positive.
    #[error("temperature must be positive, got {0}")]
    InvalidTemperature(f64),

    /// A YAML catalog document failed to parse.
    #[error("YAML catalog document error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON catalog document failed to parse.
    #[error("JSON catalog document error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
