//! Isomorphism catalog: diagrams grouped by canonical identifier.
//!
//! A catalog collects diagrams on one vertex count and keeps one class per
//! canonical identifier. Its [`CatalogManifest`] is deterministic: classes
//! are ordered by identifier, members by insertion, and the whole manifest
//! carries an xxh64 fingerprint of its canonical JSON bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_hash_hex, to_canonical_bytes, CodecError, GraphNum};
use crate::hamiltonian::Hamiltonian;
use crate::iso::IsoNumCache;
use crate::CATALOG_SCHEMA_VERSION;

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The diagram was built on another vertex count.
    #[error("Catalog holds {expected}-vertex diagrams, got one with {found}")]
    VertexCountMismatch {
        /// Vertex count of the catalog.
        expected: usize,
        /// Vertex count of the rejected diagram.
        found: usize,
    },
    /// A stored identifier failed to render.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// One equivalence class under rotation and reflection.
#[derive(Debug, Clone)]
pub struct IsoClass {
    /// Canonical identifier shared by every member.
    pub canonical: GraphNum,
    /// Members in insertion order, duplicates (equal diagrams) collapsed.
    pub members: Vec<Hamiltonian>,
}

/// Diagrams on a fixed vertex count, grouped by canonical identifier.
pub struct IsoCatalog {
    num_vertices: usize,
    classes: BTreeMap<GraphNum, IsoClass>,
    cache: IsoNumCache,
}

impl IsoCatalog {
    /// Create an empty catalog for `num_vertices`-vertex diagrams.
    pub fn new(num_vertices: usize) -> Self {
        Self::with_cache(num_vertices, IsoNumCache::default())
    }

    /// Create an empty catalog backed by an existing cache.
    pub fn with_cache(num_vertices: usize, cache: IsoNumCache) -> Self {
        Self {
            num_vertices,
            classes: BTreeMap::new(),
            cache,
        }
    }

    /// Vertex count of every diagram in the catalog.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct diagrams across all classes.
    pub fn diagram_count(&self) -> usize {
        self.classes.values().map(|c| c.members.len()).sum()
    }

    /// Add a diagram.
    ///
    /// Returns its canonical identifier and whether it opened a new class.
    pub fn insert(&mut self, diagram: Hamiltonian) -> Result<(GraphNum, bool), CatalogError> {
        if diagram.num_vertices() != self.num_vertices {
            return Err(CatalogError::VertexCountMismatch {
                expected: self.num_vertices,
                found: diagram.num_vertices(),
            });
        }

        let canonical = self.cache.canonical(&diagram);
        let is_new = !self.classes.contains_key(&canonical);
        let class = self
            .classes
            .entry(canonical.clone())
            .or_insert_with(|| IsoClass {
                canonical: canonical.clone(),
                members: Vec::new(),
            });
        if !class.members.contains(&diagram) {
            class.members.push(diagram);
        }

        if is_new {
            tracing::debug!(
                num_vertices = self.num_vertices,
                class_count = self.classes.len(),
                canonical = %canonical.fingerprint_hex(),
                "new isomorphism class"
            );
        }
        Ok((canonical, is_new))
    }

    /// Add every crossing component of `diagram` as its own entry.
    ///
    /// Returns the canonical identifier of each component, in component order.
    pub fn insert_components(&mut self, diagram: &Hamiltonian) -> Result<Vec<GraphNum>, CatalogError> {
        diagram
            .crossing_components()
            .into_iter()
            .map(|component| self.insert(component).map(|(canonical, _)| canonical))
            .collect()
    }

    /// Class containing diagrams equivalent to `diagram`, if any.
    pub fn class_of(&self, diagram: &Hamiltonian) -> Option<&IsoClass> {
        if diagram.num_vertices() != self.num_vertices {
            return None;
        }
        self.classes.get(&self.cache.canonical(diagram))
    }

    /// Classes ordered by canonical identifier.
    pub fn classes(&self) -> impl Iterator<Item = &IsoClass> {
        self.classes.values()
    }

    /// Deterministic summary of the catalog.
    pub fn manifest(&self) -> Result<CatalogManifest, CatalogError> {
        let classes = self
            .classes
            .values()
            .map(|class| -> Result<CatalogEntry, CatalogError> {
                Ok(CatalogEntry {
                    digits: class.canonical.digits(self.num_vertices)?,
                    fingerprint: class.canonical.fingerprint_hex(),
                    num_chords: class.canonical.count_ones(),
                    member_count: class.members.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog_id = canonical_hash_hex(&(
            CATALOG_SCHEMA_VERSION,
            self.num_vertices,
            &classes,
        ));

        Ok(CatalogManifest {
            catalog_id,
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            num_vertices: self.num_vertices,
            class_count: classes.len(),
            diagram_count: self.diagram_count(),
            classes,
        })
    }
}

/// One class in a [`CatalogManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical identifier rendered as slot digits.
    pub digits: String,
    /// xxh64 fingerprint of the canonical identifier.
    pub fingerprint: String,
    /// Chords per member diagram.
    pub num_chords: usize,
    /// Distinct member diagrams.
    pub member_count: usize,
}

/// Serializable catalog summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Hash of schema version, vertex count and classes.
    pub catalog_id: String,
    /// Schema version used for the manifest.
    pub schema_version: String,
    /// Vertex count of every diagram.
    pub num_vertices: usize,
    /// Number of classes.
    pub class_count: usize,
    /// Number of distinct diagrams.
    pub diagram_count: usize,
    /// Classes ordered by canonical identifier.
    pub classes: Vec<CatalogEntry>,
}

impl CatalogManifest {
    /// Serialize to canonical JSON bytes.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        to_canonical_bytes(self)
    }
}
