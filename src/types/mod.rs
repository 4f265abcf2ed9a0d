//! Geometric primitives on a cyclically ordered vertex set.

pub mod turning;
pub mod chord;
pub mod span;

pub use turning::{turning, Turning};
pub use chord::{Chord, ChordError};
pub use span::Span;
