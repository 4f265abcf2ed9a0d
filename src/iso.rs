//! Canonical identifiers under rotation and reflection.
//!
//! The symmetry group of a chord diagram on `n` vertices is the dihedral
//! group of the cycle: `n` rotations times two orientations. The canonical
//! identifier is the smallest [`GraphNum`] over that orbit, so two diagrams
//! are equivalent exactly when their canonical identifiers are equal.
//!
//! ## Search Order
//!
//! ```text
//! D, r(D), r²(D), ..., r^(n-1)(D)            // n rotations
//! s(r^(n-1)(D)), r(s(...)), ..., r^(n-1)(s(...))  // n reflections
//! ```
//!
//! where `r` rotates by one vertex and `s` reflects through vertex 0.
//! Any walk covering the 2n orbit elements yields the same minimum.
//!
//! ## Caching
//!
//! A search costs `2n` encodings. [`IsoNumCache`] memoizes canonical
//! identifiers by raw identifier for callers that canonicalize the same
//! diagrams repeatedly (e.g. every component of every diagram in a batch).

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::canonical::GraphNum;
use crate::hamiltonian::Hamiltonian;

impl Hamiltonian {
    /// Canonical identifier: the minimum encoding over all rotations and
    /// reflections of the diagram.
    pub fn graph_iso_num(&self) -> GraphNum {
        let n = self.num_vertices();
        let mut min = self.graph_num();
        if n == 0 {
            return min;
        }

        let mut copy = self.clone();
        let mut consider = |copy: &Hamiltonian| {
            let candidate = copy.graph_num();
            if candidate < min {
                min = candidate;
            }
        };

        for _ in 1..n {
            copy.rotate(1);
            consider(&copy);
        }
        copy.reflect(0);
        consider(&copy);
        for _ in 1..n {
            copy.rotate(1);
            consider(&copy);
        }

        tracing::trace!(
            num_vertices = n,
            num_chords = self.num_chords(),
            "canonical identifier computed"
        );
        min
    }

    /// Whether `other` is a rotation and/or reflection of this diagram.
    pub fn is_isomorphic(&self, other: &Hamiltonian) -> bool {
        self.num_vertices() == other.num_vertices()
            && self.num_chords() == other.num_chords()
            && self.graph_iso_num() == other.graph_iso_num()
    }
}

/// Configuration for the canonical identifier cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsoCacheConfig {
    /// Maximum number of entries in the cache.
    pub max_entries: usize,
    /// Whether to enable the cache.
    pub enabled: bool,
}

impl Default for IsoCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            enabled: true,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCacheStats {
    /// Current number of entries in the cache.
    pub len: usize,
    /// Maximum capacity of the cache.
    pub cap: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the full search.
    pub misses: u64,
}

/// Raw identifiers only collide within one vertex count.
type IsoCacheKey = (usize, GraphNum);

/// Thread-safe LRU memo of canonical identifiers.
///
/// # Example
///
/// ```rust
/// use pancyclic::{Chord, Hamiltonian, IsoNumCache};
///
/// let cache = IsoNumCache::default();
/// let d = Hamiltonian::from_chords(8, [Chord::new(0, 4, 8)]).unwrap();
///
/// let first = cache.canonical(&d);
/// let second = cache.canonical(&d.rotated(3));
/// assert_eq!(first, second);
/// ```
pub struct IsoNumCache {
    cache: Option<Arc<RwLock<LruCache<IsoCacheKey, GraphNum>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl IsoNumCache {
    /// Create a cache with the given configuration.
    pub fn new(config: IsoCacheConfig) -> Self {
        let cache = if config.enabled {
            let size = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
            Some(Arc::new(RwLock::new(LruCache::new(size))))
        } else {
            None
        };

        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Canonical identifier of `diagram`, served from the cache when possible.
    pub fn canonical(&self, diagram: &Hamiltonian) -> GraphNum {
        let Some(cache) = &self.cache else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return diagram.graph_iso_num();
        };

        let key = (diagram.num_vertices(), diagram.graph_num());
        if let Some(hit) = cache.read().peek(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(num_vertices = key.0, "canonical identifier cache hit");
            return hit.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let canonical = diagram.graph_iso_num();
        cache.write().put(key, canonical.clone());
        canonical
    }

    /// Get cache statistics.
    ///
    /// Returns `None` if caching is disabled.
    pub fn stats(&self) -> Option<IsoCacheStats> {
        self.cache.as_ref().map(|cache| {
            let cache = cache.read();
            IsoCacheStats {
                len: cache.len(),
                cap: cache.cap().get(),
                hits: self.hits.load(Ordering::Relaxed),
                misses: self.misses.load(Ordering::Relaxed),
            }
        })
    }

    /// Drop every cached entry. Does nothing if caching is disabled.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.write().clear();
        }
    }
}

impl Default for IsoNumCache {
    fn default() -> Self {
        Self::new(IsoCacheConfig::default())
    }
}
