//! Chords on a fixed-size cyclic vertex set.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::turning::turning;

/// Error type for chord comparisons.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordError {
    /// Chords live on cycles of different sizes.
    #[error("Can only compare chords with the same number of vertices: {left} != {right}")]
    VertexCountMismatch {
        /// Vertex count of the left operand.
        left: usize,
        /// Vertex count of the right operand.
        right: usize,
    },
}

/// An unordered pair of vertex positions on a cycle of `num_vertices` vertices.
///
/// Endpoints are always reduced into `[0, num_vertices)` and stored with
/// `start <= end`, so `Chord::new(5, 2, n) == Chord::new(2, 5, n)`.
///
/// Hashing only looks at the endpoints. Chords from cycles of different
/// sizes should never share a hash-keyed collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "ChordRecord")]
pub struct Chord {
    num_vertices: usize,
    start: usize,
    end: usize,
}

impl Chord {
    /// Create a chord, normalizing both endpoints modulo `num_vertices`.
    ///
    /// # Panics
    /// Panics if `num_vertices` is zero.
    pub fn new(start: i64, end: i64, num_vertices: usize) -> Self {
        assert!(num_vertices > 0, "a chord needs at least one vertex");
        let (start, end) = normalize(start, end, num_vertices);
        Self {
            num_vertices,
            start,
            end,
        }
    }

    /// Smaller endpoint.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Larger endpoint.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Size of the cycle this chord lives on.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Maximum number of chords on `num_vertices` vertices: `n(n-3)/2`.
    ///
    /// Every pair of vertices except the `n` cycle edges themselves.
    pub fn max_num_chords(num_vertices: usize) -> usize {
        num_vertices * num_vertices.saturating_sub(3) / 2
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether the endpoints are neighbours on the cycle, i.e. the "chord"
    /// is really one of the cycle's own edges.
    pub fn is_adjacent(&self) -> bool {
        self.end == self.start + 1 || (self.start == 0 && self.end + 1 == self.num_vertices)
    }

    /// Shift both endpoints clockwise by `rotation`.
    pub fn rotate(&mut self, rotation: i64) {
        let k = rotation.rem_euclid(self.num_vertices as i64);
        let (start, end) = normalize(
            self.start as i64 + k,
            self.end as i64 + k,
            self.num_vertices,
        );
        self.start = start;
        self.end = end;
    }

    /// Rotated copy of this chord.
    pub fn rotated(mut self, rotation: i64) -> Self {
        self.rotate(rotation);
        self
    }

    /// Mirror both endpoints through `pivot`: `v -> 2 * pivot - v`.
    pub fn reflect(&mut self, pivot: i64) {
        let p = pivot.rem_euclid(self.num_vertices as i64);
        let (start, end) = normalize(
            2 * p - self.start as i64,
            2 * p - self.end as i64,
            self.num_vertices,
        );
        self.start = start;
        self.end = end;
    }

    /// Reflected copy of this chord.
    pub fn reflected(mut self, pivot: i64) -> Self {
        self.reflect(pivot);
        self
    }

    /// Whether the two chords' endpoints strictly interleave around the cycle.
    ///
    /// Chords sharing an endpoint never cross, and neither do degenerate
    /// chords. The relation is symmetric.
    pub fn crossing(&self, other: &Chord) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let t1 = turning(self.start, other.start, self.end);
        let t2 = turning(self.end, other.end, self.start);
        t1 == t2 && t1.is_strict()
    }

    /// Lexicographic comparison on `(start, end)`.
    ///
    /// Fails when the chords come from cycles of different sizes.
    pub fn try_cmp(&self, other: &Chord) -> Result<Ordering, ChordError> {
        if self.num_vertices != other.num_vertices {
            return Err(ChordError::VertexCountMismatch {
                left: self.num_vertices,
                right: other.num_vertices,
            });
        }
        Ok((self.start, self.end).cmp(&(other.start, other.end)))
    }
}

/// Unvalidated wire form; endpoints are normalized on the way in.
#[derive(Deserialize)]
struct ChordRecord {
    num_vertices: usize,
    start: i64,
    end: i64,
}

impl TryFrom<ChordRecord> for Chord {
    type Error = String;

    fn try_from(record: ChordRecord) -> Result<Self, Self::Error> {
        if record.num_vertices == 0 {
            return Err("chord must have a positive vertex count".to_string());
        }
        Ok(Self::new(record.start, record.end, record.num_vertices))
    }
}

fn normalize(start: i64, end: i64, num_vertices: usize) -> (usize, usize) {
    let n = num_vertices as i64;
    let start = start.rem_euclid(n) as usize;
    let end = end.rem_euclid(n) as usize;
    if end < start {
        (end, start)
    } else {
        (start, end)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices == other.num_vertices
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

// No `Ord`: chords on different cycles are incomparable.
impl PartialOrd for Chord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chord(num_verts: {}, start: {}, end: {})",
            self.num_vertices, self.start, self.end
        )
    }
}
