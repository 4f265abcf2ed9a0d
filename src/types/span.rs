//! Directed arcs of the cycle.

use serde::{Deserialize, Serialize};

use super::chord::Chord;
use super::turning::{turning, Turning};

/// The closed clockwise arc from `start` to `end`.
///
/// Unlike a [`Chord`], a span is directed: `Span::new(2, 5, n)` and
/// `Span::new(5, 2, n)` cover complementary arcs (sharing their endpoints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    num_vertices: usize,
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span. Endpoints are taken as given, already in `[0, num_vertices)`.
    pub fn new(start: usize, end: usize, num_vertices: usize) -> Self {
        Self {
            num_vertices,
            start,
            end,
        }
    }

    /// First vertex of the arc.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last vertex of the arc.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Size of the cycle the span lives on.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Whether `vertex` lies on the arc, endpoints included.
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(
            turning(self.start, vertex, self.end),
            Turning::Clockwise | Turning::MidIsStart | Turning::MidIsEnd | Turning::AllEqual
        )
    }

    /// Whether each span's endpoints lie within the other's arc.
    pub fn coincident(&self, other: &Span) -> bool {
        self.contains(other.start)
            && self.contains(other.end)
            && other.contains(self.start)
            && other.contains(self.end)
    }
}

impl From<Chord> for Span {
    fn from(chord: Chord) -> Self {
        Self::new(chord.start(), chord.end(), chord.num_vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_closed_arc() {
        let span = Span::new(2, 6, 10);
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(span.contains(6));
        assert!(!span.contains(7));
        assert!(!span.contains(0));
    }

    #[test]
    fn test_contains_wrapping_arc() {
        let span = Span::new(8, 1, 10);
        assert!(span.contains(9));
        assert!(span.contains(0));
        assert!(span.contains(1));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_single_vertex_span() {
        let span = Span::new(3, 3, 10);
        assert!(span.contains(3));
    }

    #[test]
    fn test_coincident() {
        let s1 = Span::new(0, 9, 18);
        let s2 = Span::new(4, 1, 18);
        let s3 = Span::new(13, 10, 18);

        // s1 and s2 each reach into the other's arc at both ends.
        assert!(s1.coincident(&s2));
        assert!(s2.coincident(&s1));
        assert!(!s1.coincident(&s3));
        assert!(!s3.coincident(&s1));
    }

    #[test]
    fn test_from_chord() {
        let span = Span::from(Chord::new(15, 3, 18));
        assert_eq!((span.start(), span.end()), (3, 15));
        assert!(span.contains(9));
    }
}
