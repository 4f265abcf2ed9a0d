//! # pancyclic
//!
//! Chord diagrams on a Hamiltonian cycle: crossing detection, crossing
//! components, and canonical identifiers under rotation and reflection.
//!
//! A diagram is a cycle on `n` vertices plus a set of chords between
//! non-adjacent vertices. The crate answers three questions about it:
//!
//! 1. Which chords cross, and how do they group into crossing components?
//! 2. What is the diagram's canonical identifier, the same for every
//!    rotation and reflection of the cycle?
//! 3. Which diagram does a given identifier describe?
//!
//! ## Architecture
//!
//! ```text
//! Chords → Hamiltonian → crossing components (union-find)
//!                ↓
//!          GraphNum (slot bit-string) → min over 2n symmetries → canonical id
//!                ↑                                                   ↓
//!          from_graph_num  ←─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pancyclic::{Chord, Hamiltonian};
//!
//! let n = 8;
//! let d = Hamiltonian::from_chords(n, [Chord::new(0, 4, n), Chord::new(2, 6, n)]).unwrap();
//! assert_eq!(d.crossing_components().len(), 1);
//!
//! let id = d.graph_iso_num();
//! assert_eq!(d.rotated(1).graph_iso_num(), id);
//!
//! let back = Hamiltonian::from_graph_num(n, &id).unwrap();
//! assert!(back.is_isomorphic(&d));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod hamiltonian;
pub mod components;
pub mod canonical;
pub mod iso;
pub mod describe;
pub mod catalog;

// Re-exports
pub use types::{turning, Turning, Chord, ChordError, Span};
pub use hamiltonian::{Hamiltonian, DiagramError};
pub use components::UnionFind;
pub use canonical::{
    GraphNum, ChordSlots, CodecError, slot_index, num_words, WORD_BITS,
    to_canonical_bytes, canonical_hash, canonical_hash_hex,
};
pub use iso::{IsoNumCache, IsoCacheConfig, IsoCacheStats};
pub use describe::DescribeOptions;
pub use catalog::{IsoCatalog, IsoClass, CatalogManifest, CatalogEntry, CatalogError};

/// Schema version for catalog manifests.
/// Increment on breaking changes to the manifest or identifier layout.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0.0";
