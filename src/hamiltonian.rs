//! Chord diagrams: a Hamiltonian cycle plus non-adjacent chords.
//!
//! ## Storage
//!
//! Chords are kept as an adjacency list with one bucket per start vertex.
//! Each bucket is a `BTreeSet` of end vertices, so enumeration is ordered
//! by `(start, end)` without any sorting step and duplicate insertions
//! collapse for free.
//!
//! ## Invariants
//!
//! - Every stored chord has `start < end`, both in `[0, num_vertices)`
//! - No chord joins a vertex to itself or to a cycle neighbour
//! - `num_chords` equals the total size of all buckets

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::Chord;

/// Error type for diagram construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The chord was built for a cycle of a different size.
    #[error("Chord has {found} vertices but the diagram has {expected}")]
    VertexCountMismatch {
        /// Vertex count of the diagram.
        expected: usize,
        /// Vertex count of the offending chord.
        found: usize,
    },
    /// The chord duplicates one of the cycle's own edges.
    #[error("Chord endpoints are adjacent on the cycle: {0}")]
    AdjacentEndpoints(Chord),
    /// The chord joins a vertex to itself.
    #[error("Chord endpoints coincide: {0}")]
    DegenerateChord(Chord),
    /// A serialized endpoint lies outside `[0, num_vertices)`.
    #[error("Vertex {vertex} is out of range for {num_vertices} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Vertex count of the diagram.
        num_vertices: usize,
    },
}

/// A chord diagram over `num_vertices` cyclically ordered vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DiagramRecord", into = "DiagramRecord")]
pub struct Hamiltonian {
    num_vertices: usize,
    num_chords: usize,
    /// `buckets[s]` holds every `e` such that `(s, e)` is a chord.
    buckets: Vec<BTreeSet<usize>>,
}

impl Hamiltonian {
    /// Create an empty diagram on `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            num_chords: 0,
            buckets: vec![BTreeSet::new(); num_vertices],
        }
    }

    /// Build a diagram from a collection of chords.
    ///
    /// Duplicates collapse and insertion order is irrelevant.
    pub fn from_chords<I>(num_vertices: usize, chords: I) -> Result<Self, DiagramError>
    where
        I: IntoIterator<Item = Chord>,
    {
        let mut diagram = Self::new(num_vertices);
        for chord in chords {
            diagram.add_chord(chord)?;
        }
        Ok(diagram)
    }

    /// Number of vertices on the cycle.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of distinct chords.
    pub fn num_chords(&self) -> usize {
        self.num_chords
    }

    /// Whether the diagram has no chords.
    pub fn is_empty(&self) -> bool {
        self.num_chords == 0
    }

    /// Add a chord.
    ///
    /// Returns `Ok(true)` if the chord was new and `Ok(false)` if it was
    /// already present. Chords from another cycle size, chords joining cycle
    /// neighbours and chords joining a vertex to itself are rejected.
    pub fn add_chord(&mut self, chord: Chord) -> Result<bool, DiagramError> {
        if chord.num_vertices() != self.num_vertices {
            return Err(DiagramError::VertexCountMismatch {
                expected: self.num_vertices,
                found: chord.num_vertices(),
            });
        }
        if chord.is_degenerate() {
            return Err(DiagramError::DegenerateChord(chord));
        }
        if chord.is_adjacent() {
            return Err(DiagramError::AdjacentEndpoints(chord));
        }
        Ok(self.insert_normalized(chord.start(), chord.end()))
    }

    /// Insert a pre-validated `(start, end)` pair.
    pub(crate) fn insert_normalized(&mut self, start: usize, end: usize) -> bool {
        let inserted = self.buckets[start].insert(end);
        if inserted {
            self.num_chords += 1;
        }
        inserted
    }

    /// Whether the diagram contains `chord`.
    pub fn contains(&self, chord: &Chord) -> bool {
        chord.num_vertices() == self.num_vertices && self.contains_pair(chord.start(), chord.end())
    }

    pub(crate) fn contains_pair(&self, start: usize, end: usize) -> bool {
        self.buckets
            .get(start)
            .map_or(false, |ends| ends.contains(&end))
    }

    /// Iterate over the chords, ordered by start vertex then end vertex.
    ///
    /// The iterator is lazy and `Clone`; call `chords()` again (or clone it)
    /// to traverse from the beginning.
    pub fn chords(&self) -> impl Iterator<Item = Chord> + Clone + '_ {
        let n = self.num_vertices;
        self.buckets.iter().enumerate().flat_map(move |(start, ends)| {
            ends.iter()
                .map(move |&end| Chord::new(start as i64, end as i64, n))
        })
    }

    /// Replace every chord with `transform(chord)`.
    ///
    /// `transform` must map valid chords to valid chords (rotations and
    /// reflections do); the result is re-bucketed from scratch.
    fn transform_chords<F>(&mut self, transform: F)
    where
        F: Fn(Chord) -> Chord,
    {
        let transformed: Vec<Chord> = self.chords().map(transform).collect();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.num_chords = 0;
        for chord in transformed {
            self.insert_normalized(chord.start(), chord.end());
        }
    }

    /// Rotate every chord clockwise by `rotation` vertices.
    pub fn rotate(&mut self, rotation: i64) {
        if self.num_vertices == 0 {
            return;
        }
        self.transform_chords(|chord| chord.rotated(rotation));
    }

    /// Rotated copy of the diagram.
    pub fn rotated(&self, rotation: i64) -> Self {
        let mut copy = self.clone();
        copy.rotate(rotation);
        copy
    }

    /// Reflect every chord through vertex `pivot`.
    pub fn reflect(&mut self, pivot: i64) {
        if self.num_vertices == 0 {
            return;
        }
        self.transform_chords(|chord| chord.reflected(pivot));
    }

    /// Reflected copy of the diagram.
    pub fn reflected(&self, pivot: i64) -> Self {
        let mut copy = self.clone();
        copy.reflect(pivot);
        copy
    }
}

/// Serialized form: the vertex count plus a flat `(start, end)` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiagramRecord {
    num_vertices: usize,
    chords: Vec<(usize, usize)>,
}

impl From<Hamiltonian> for DiagramRecord {
    fn from(diagram: Hamiltonian) -> Self {
        Self {
            num_vertices: diagram.num_vertices,
            chords: diagram.chords().map(|c| (c.start(), c.end())).collect(),
        }
    }
}

impl TryFrom<DiagramRecord> for Hamiltonian {
    type Error = DiagramError;

    fn try_from(record: DiagramRecord) -> Result<Self, Self::Error> {
        let n = record.num_vertices;
        let mut diagram = Hamiltonian::new(n);
        for (start, end) in record.chords {
            if let Some(&vertex) = [start, end].iter().find(|&&v| v >= n) {
                return Err(DiagramError::VertexOutOfRange {
                    vertex,
                    num_vertices: n,
                });
            }
            diagram.add_chord(Chord::new(start as i64, end as i64, n))?;
        }
        Ok(diagram)
    }
}
