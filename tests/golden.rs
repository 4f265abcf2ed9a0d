//! Golden tests for the chord-diagram engine.
//!
//! These pin the reference scenarios: the 18-vertex sample diagram and the
//! minimal 6-vertex diagram.

use std::collections::HashSet;
use std::sync::Arc;

use pancyclic::{Chord, GraphNum, Hamiltonian, IsoCatalog};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

const N: usize = 18;

fn chord(start: i64, end: i64) -> Chord {
    Chord::new(start, end, N)
}

fn sample_diagram() -> Hamiltonian {
    // Deliberately out of order, with one duplicate given reversed.
    let chords = [
        chord(12, 14),
        chord(0, 16),
        chord(7, 9),
        chord(1, 15),
        chord(2, 4),
        chord(17, 10),
        chord(3, 5),
        chord(6, 8),
        chord(11, 13),
        chord(16, 0),
    ];
    Hamiltonian::from_chords(N, chords).unwrap()
}

fn pairs(d: &Hamiltonian) -> Vec<(usize, usize)> {
    d.chords().map(|c| (c.start(), c.end())).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// 18-vertex sample
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sample_enumeration() {
    let d = sample_diagram();
    assert_eq!(d.num_chords(), 9);
    assert_eq!(
        pairs(&d),
        vec![
            (0, 16),
            (1, 15),
            (2, 4),
            (3, 5),
            (6, 8),
            (7, 9),
            (10, 17),
            (11, 13),
            (12, 14)
        ]
    );
}

#[test]
fn test_sample_components() {
    let d = sample_diagram();
    let comps = d.crossing_components();

    let got: Vec<Vec<(usize, usize)>> = comps.iter().map(pairs).collect();
    assert_eq!(
        got,
        vec![
            vec![(0, 16), (1, 15), (10, 17)],
            vec![(2, 4), (3, 5)],
            vec![(6, 8), (7, 9)],
            vec![(11, 13), (12, 14)],
        ]
    );
    assert!(comps.iter().all(|c| c.num_vertices() == N));
}

#[test]
fn test_sample_components_partition() {
    let d = sample_diagram();
    let mut seen = HashSet::new();
    for comp in d.crossing_components() {
        for c in comp.chords() {
            assert!(seen.insert(c), "chord {c} appears in two components");
        }
    }
    let all: HashSet<Chord> = d.chords().collect();
    assert_eq!(seen, all);
}

#[test]
fn test_sample_components_map() {
    let d = sample_diagram();
    let map = d.crossing_components_map();
    assert_eq!(map.len(), 9);

    let outer = &map[&chord(0, 16)];
    assert!(Arc::ptr_eq(outer, &map[&chord(1, 15)]));
    assert!(Arc::ptr_eq(outer, &map[&chord(10, 17)]));
    assert!(!Arc::ptr_eq(outer, &map[&chord(2, 4)]));

    let distinct: HashSet<*const Hamiltonian> = map.values().map(Arc::as_ptr).collect();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn test_sample_identifier_round_trip() {
    let d = sample_diagram();
    let num = d.graph_num();
    assert_eq!(num.words().len(), 3);
    assert_eq!(num.count_ones(), 9);
    assert_eq!(num.digits(N).unwrap().len(), 135);
    assert_eq!(Hamiltonian::from_graph_num(N, &num).unwrap(), d);
}

#[test]
fn test_sample_canonical_identifier() {
    let d = sample_diagram();
    let iso = d.graph_iso_num();
    assert!(iso <= d.graph_num());

    let iso_graph = Hamiltonian::from_graph_num(N, &iso).unwrap();
    assert_eq!(iso_graph.num_chords(), 9);
    assert_eq!(iso_graph.graph_iso_num(), iso);
    assert_eq!(iso_graph.crossing_components().len(), 4);
    assert!(iso_graph.is_isomorphic(&d));
}

#[test]
fn test_sample_component_classes() {
    // The three short crossing pairs are rotations of each other.
    let mut catalog = IsoCatalog::new(N);
    let ids = catalog.insert_components(&sample_diagram()).unwrap();
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[1], ids[2]);
    assert_eq!(ids[1], ids[3]);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(catalog.class_count(), 2);
    assert_eq!(catalog.diagram_count(), 4);
}

// ─────────────────────────────────────────────────────────────────────────────
// Minimal and degenerate diagrams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_six_vertex_single_chord() {
    assert_eq!(Chord::max_num_chords(6), 9);

    let d = Hamiltonian::from_chords(6, [Chord::new(0, 2, 6)]).unwrap();
    let num = d.graph_num();
    assert_eq!(num.digits(6).unwrap(), "100000000");

    let back = Hamiltonian::from_graph_num(6, &num).unwrap();
    assert_eq!(back, d);
    assert_eq!(pairs(&back), vec![(0, 2)]);
}

#[test]
fn test_empty_diagram_identifier() {
    for n in [4, 6, 13, 18, 40] {
        let d = Hamiltonian::new(n);
        let num = d.graph_num();
        let words = Chord::max_num_chords(n).div_ceil(64);
        assert_eq!(num, GraphNum::from_words(vec![0; words]), "n = {n}");
        assert_eq!(d.graph_iso_num(), num);
        assert!(d.crossing_components().is_empty());
    }
}

#[test]
fn test_tiny_cycles_have_no_slots() {
    for n in 0..4 {
        let d = Hamiltonian::new(n);
        assert!(d.graph_num().words().is_empty());
        assert_eq!(d.graph_iso_num(), d.graph_num());
        assert_eq!(d.graph_num().digits(n).unwrap(), "");
    }
}

#[test]
fn test_digits_parse_back_to_same_diagram() {
    let d = sample_diagram();
    let digits = d.graph_iso_num().digits(N).unwrap();
    let parsed = GraphNum::from_digits(N, &digits).unwrap();
    let decoded = Hamiltonian::from_graph_num(N, &parsed).unwrap();
    assert!(decoded.is_isomorphic(&d));
}
