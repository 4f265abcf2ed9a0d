//! Bit-string identifiers for chord diagrams.
//!
//! ## Slot Enumeration
//!
//! Every chord a diagram on `n` vertices could contain gets a fixed slot,
//! enumerated by start ascending, then end ascending:
//!
//! ```text
//! (0, 2) (0, 3) ... (0, n-2)      // (0, n-1) is a cycle edge
//! (1, 3) (1, 4) ... (1, n-1)
//! ...
//! (n-3, n-1)
//! ```
//!
//! That is `n(n-3)/2` slots. A diagram's [`GraphNum`] sets bit `i` when it
//! contains the chord in slot `i`.
//!
//! ## Packing
//!
//! Bits are packed into `u64` words, slot `i` at word `i / 64`, bit `i % 64`.
//! Padding bits past the last slot are always zero.
//!
//! ## Ordering
//!
//! `GraphNum` orders lexicographically over its words starting at word 0,
//! each word compared as an unsigned integer. This is the order the
//! canonicalization search minimizes over.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh64::xxh64;

use crate::hamiltonian::Hamiltonian;
use crate::types::Chord;

/// Bits per packed word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Error type for decoding identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Word count does not match the vertex count.
    #[error("Graph number for {num_vertices} vertices needs {expected} words, got {found}")]
    WrongLength {
        /// Vertex count the identifier was decoded against.
        num_vertices: usize,
        /// Required number of words.
        expected: usize,
        /// Number of words supplied.
        found: usize,
    },
    /// Bits past the last slot are set.
    #[error("Graph number for {num_vertices} vertices has padding bits set")]
    PaddingBitsSet {
        /// Vertex count the identifier was decoded against.
        num_vertices: usize,
    },
    /// Digit string has the wrong number of digits.
    #[error("Expected {expected} digits, got {found}")]
    DigitCountMismatch {
        /// Required number of digits.
        expected: usize,
        /// Number of digits supplied.
        found: usize,
    },
    /// Digit string contains something other than '0' or '1'.
    #[error("Invalid digit {found:?} at position {index}")]
    InvalidDigit {
        /// Position of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Number of `u64` words needed for the slots of `num_vertices` vertices.
pub fn num_words(num_vertices: usize) -> usize {
    Chord::max_num_chords(num_vertices).div_ceil(WORD_BITS)
}

/// Position of `(start, end)` in the slot enumeration.
///
/// Returns `None` for pairs that have no slot: out of range, unordered,
/// equal or adjacent on the cycle.
pub fn slot_index(start: usize, end: usize, num_vertices: usize) -> Option<usize> {
    let n = num_vertices;
    if start >= n || end >= n || end < start + 2 || (start == 0 && end == n - 1) {
        return None;
    }
    if start == 0 {
        return Some(end - 2);
    }
    // Row 0 holds n-3 slots; row t >= 1 holds n-2-t slots.
    let before = (n - 3) + (start - 1) * (n - 2) - start * (start - 1) / 2;
    Some(before + (end - start - 2))
}

/// Iterator over every chord slot of a cycle, in slot order.
#[derive(Debug, Clone)]
pub struct ChordSlots {
    num_vertices: usize,
    start: usize,
    end: usize,
    remaining: usize,
}

impl ChordSlots {
    /// Slots for a cycle of `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            start: 0,
            end: 2,
            remaining: Chord::max_num_chords(num_vertices),
        }
    }
}

impl Iterator for ChordSlots {
    type Item = Chord;

    fn next(&mut self) -> Option<Chord> {
        if self.remaining == 0 {
            return None;
        }
        let n = self.num_vertices;
        let row_end = if self.start == 0 { n - 1 } else { n };
        if self.end >= row_end {
            self.start += 1;
            self.end = self.start + 2;
        }
        let chord = Chord::new(self.start as i64, self.end as i64, n);
        self.end += 1;
        self.remaining -= 1;
        Some(chord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ChordSlots {}

/// Packed adjacency bit-string of a chord diagram.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphNum(Vec<u64>);

impl GraphNum {
    /// All-zero identifier (the empty diagram) for `num_vertices` vertices.
    pub fn zeroed(num_vertices: usize) -> Self {
        Self(vec![0; num_words(num_vertices)])
    }

    /// Wrap raw words. No validation happens until the words are decoded.
    pub fn from_words(words: Vec<u64>) -> Self {
        Self(words)
    }

    /// The packed words.
    pub fn words(&self) -> &[u64] {
        &self.0
    }

    /// Whether slot `index` is set. Out-of-range slots read as unset.
    pub fn bit(&self, index: usize) -> bool {
        self.0
            .get(index / WORD_BITS)
            .map_or(false, |word| (word >> (index % WORD_BITS)) & 1 == 1)
    }

    /// Set slot `index`.
    ///
    /// # Panics
    /// Panics if `index` lies beyond the allocated words.
    pub fn set_bit(&mut self, index: usize) {
        self.0[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Number of set slots, i.e. the chord count of the encoded diagram.
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check the word count and padding against `num_vertices`.
    pub fn validate(&self, num_vertices: usize) -> Result<(), CodecError> {
        let expected = num_words(num_vertices);
        if self.0.len() != expected {
            return Err(CodecError::WrongLength {
                num_vertices,
                expected,
                found: self.0.len(),
            });
        }
        let used = Chord::max_num_chords(num_vertices) % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.0.last() {
                if last >> used != 0 {
                    return Err(CodecError::PaddingBitsSet { num_vertices });
                }
            }
        }
        Ok(())
    }

    /// Render the slot bits as a `'0'`/`'1'` string, one digit per slot.
    pub fn digits(&self, num_vertices: usize) -> Result<String, CodecError> {
        self.validate(num_vertices)?;
        Ok((0..Chord::max_num_chords(num_vertices))
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect())
    }

    /// Parse the rendering produced by [`GraphNum::digits`].
    pub fn from_digits(num_vertices: usize, digits: &str) -> Result<Self, CodecError> {
        let expected = Chord::max_num_chords(num_vertices);
        let found = digits.chars().count();
        if found != expected {
            return Err(CodecError::DigitCountMismatch { expected, found });
        }
        let mut num = Self::zeroed(num_vertices);
        for (index, ch) in digits.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => num.set_bit(index),
                found => return Err(CodecError::InvalidDigit { index, found }),
            }
        }
        Ok(num)
    }

    /// Stable xxh64 fingerprint of the identifier, as 16 hex digits.
    pub fn fingerprint_hex(&self) -> String {
        canonical_hash_hex(self)
    }
}

impl Hamiltonian {
    /// Encode the diagram as its slot bit-string.
    pub fn graph_num(&self) -> GraphNum {
        let n = self.num_vertices();
        let mut num = GraphNum::zeroed(n);
        for chord in self.chords() {
            // Stored chords are never adjacent, so every one has a slot.
            if let Some(index) = slot_index(chord.start(), chord.end(), n) {
                num.set_bit(index);
            }
        }
        num
    }

    /// Decode a slot bit-string back into a diagram.
    pub fn from_graph_num(num_vertices: usize, graph_num: &GraphNum) -> Result<Self, CodecError> {
        graph_num.validate(num_vertices)?;
        let mut diagram = Hamiltonian::new(num_vertices);
        for (index, slot) in ChordSlots::new(num_vertices).enumerate() {
            if graph_num.bit(index) {
                diagram.insert_normalized(slot.start(), slot.end());
            }
        }
        Ok(diagram)
    }
}

/// Serialize a value to canonical JSON bytes for hashing.
///
/// Struct fields serialize in declaration order and vectors in index order,
/// so equal values always produce equal bytes. Hashed data must not contain
/// `HashMap`s.
///
/// # Panics
/// Panics if `value` cannot be represented as JSON, e.g. a map with
/// non-string keys.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
