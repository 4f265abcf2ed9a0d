//! Human-readable diagram reports.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::hamiltonian::Hamiltonian;

/// Which identifiers to include in a [`Hamiltonian::describe`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    /// Emit the raw slot digits ("Graph number").
    pub include_bitstring: bool,
    /// Emit the canonical slot digits ("Iso graph number").
    pub include_canonical_bitstring: bool,
}

impl DescribeOptions {
    /// Only the vertex count, chord count and chords.
    pub fn chords_only() -> Self {
        Self {
            include_bitstring: false,
            include_canonical_bitstring: false,
        }
    }

    /// Read overrides from `DESCRIBE_BITSTRING` / `DESCRIBE_CANONICAL`.
    ///
    /// Unset variables keep the default (enabled); `0`, `false`, `off` and
    /// `no` disable.
    pub fn from_env() -> Self {
        let flag = |name: &str| match std::env::var(name) {
            Ok(v) => !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ),
            Err(_) => true,
        };
        Self {
            include_bitstring: flag("DESCRIBE_BITSTRING"),
            include_canonical_bitstring: flag("DESCRIBE_CANONICAL"),
        }
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            include_bitstring: true,
            include_canonical_bitstring: true,
        }
    }
}

impl Hamiltonian {
    /// Multi-line report: vertex count, chord count, each chord, and
    /// optionally the raw and canonical identifiers as digit strings.
    pub fn describe(&self, options: &DescribeOptions) -> String {
        let n = self.num_vertices();
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Number of vertices: {n}");
        let _ = writeln!(out, "Number of chords: {}", self.num_chords());
        let _ = writeln!(out, "Chords:");
        for chord in self.chords() {
            let _ = writeln!(out, "\t{chord}");
        }

        if options.include_bitstring {
            let _ = writeln!(out, "Graph number: ");
            let _ = writeln!(out, "{}", digits_or_empty(&self.graph_num(), n));
        }
        if options.include_canonical_bitstring {
            let _ = writeln!(out, "Iso graph number: ");
            let _ = writeln!(out, "{}", digits_or_empty(&self.graph_iso_num(), n));
        }
        out
    }
}

fn digits_or_empty(num: &crate::canonical::GraphNum, n: usize) -> String {
    // Encodings produced by the diagram itself always validate.
    num.digits(n).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chord;

    fn sample() -> Hamiltonian {
        Hamiltonian::from_chords(6, [Chord::new(1, 3, 6)]).unwrap()
    }

    #[test]
    fn test_chords_only() {
        let report = sample().describe(&DescribeOptions::chords_only());
        assert_eq!(
            report,
            "Number of vertices: 6\n\
             Number of chords: 1\n\
             Chords:\n\
             \tChord(num_verts: 6, start: 1, end: 3)\n"
        );
    }

    #[test]
    fn test_full_report() {
        let report = sample().describe(&DescribeOptions::default());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[4], "Graph number: ");
        assert_eq!(lines[5], "000100000");
        assert_eq!(lines[6], "Iso graph number: ");
        // (1,3) rotates back to (0,2), slot 0.
        assert_eq!(lines[7], "100000000");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: DescribeOptions =
            serde_json::from_str(r#"{"include_canonical_bitstring":false}"#).unwrap();
        assert!(opts.include_bitstring);
        assert!(!opts.include_canonical_bitstring);
    }
}
