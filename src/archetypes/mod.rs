//! Reference archetypes: the fixed catalog of idealized personality
//! types that trait vectors are scored against.

pub mod catalog;
pub mod diversity;
pub mod document;

pub use catalog::{Archetype, ArchetypeCatalog};
pub use diversity::DiversityStats;
pub use document::{ArchetypeDocument, ArchetypeEntry};
