//! Crossing-component decomposition.
//!
//! Two chords are connected when they cross; a crossing component is a
//! maximal set of chords connected through chains of crossings.
//!
//! ## Algorithm
//!
//! 1. Index the chords in enumeration order
//! 2. Test every unordered pair for crossing and union crossing pairs
//! 3. Group chords by union-find root, keeping first-appearance order
//! 4. Materialize one diagram per group
//!
//! Step 2 is quadratic in the chord count, which stays small in practice
//! (at most `n/2` for a perfect matching on `n` vertices).

use std::collections::HashMap;
use std::sync::Arc;

use crate::hamiltonian::Hamiltonian;
use crate::types::Chord;

/// Disjoint sets over `0..len` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were
    /// already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

impl Hamiltonian {
    /// Chords grouped by crossing component.
    ///
    /// Groups appear in the order of their first chord in [`Hamiltonian::chords`],
    /// and each group lists its chords in enumeration order.
    pub fn crossing_groups(&self) -> Vec<Vec<Chord>> {
        let chords: Vec<Chord> = self.chords().collect();
        let mut sets = UnionFind::new(chords.len());

        for i in 0..chords.len() {
            for j in (i + 1)..chords.len() {
                if chords[i].crossing(&chords[j]) {
                    sets.union(i, j);
                }
            }
        }

        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<Chord>> = Vec::new();
        for (idx, chord) in chords.into_iter().enumerate() {
            let root = sets.find(idx);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(chord);
        }

        tracing::debug!(
            num_vertices = self.num_vertices(),
            num_chords = self.num_chords(),
            num_components = groups.len(),
            "crossing components computed"
        );

        groups
    }

    /// One diagram per crossing component, each on the same vertex count.
    ///
    /// An empty diagram has no components.
    pub fn crossing_components(&self) -> Vec<Hamiltonian> {
        self.crossing_groups()
            .into_iter()
            .map(|group| self.component_from_group(&group))
            .collect()
    }

    /// Map every chord to the component that contains it.
    ///
    /// All chords of one component share a single `Arc`.
    pub fn crossing_components_map(&self) -> HashMap<Chord, Arc<Hamiltonian>> {
        let mut map = HashMap::with_capacity(self.num_chords());
        for group in self.crossing_groups() {
            let component = Arc::new(self.component_from_group(&group));
            for chord in group {
                map.insert(chord, Arc::clone(&component));
            }
        }
        map
    }

    fn component_from_group(&self, group: &[Chord]) -> Hamiltonian {
        let mut component = Hamiltonian::new(self.num_vertices());
        for chord in group {
            component.insert_normalized(chord.start(), chord.end());
        }
        component
    }
}
