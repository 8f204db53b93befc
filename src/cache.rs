//! Single-entry memoization for layout results.
//!
//! Layout is a pure function of its input, so the cache keeps only the most
//! recent `(input, layout)` pair. Asking again with an equal input returns the
//! stored layout; any change recomputes and replaces it. A superseded layout
//! is simply dropped.
//!
//! Render-only state (colors, camera) is not part of the key, so changing it
//! never triggers a recomputation.
//!
//! # Usage
//!
//! ```
//! use decklayout::{DeckCache, DeckConfig, Orientation, RectDeck};
//!
//! let mut cache = DeckCache::new();
//! let key = (RectDeck::new(4.0, 6.0, Orientation::AlongWidth), DeckConfig::rectangular());
//!
//! let boards = cache
//!     .try_get_or_compute(key, |(deck, config)| deck.compute(config))
//!     .unwrap()
//!     .boards
//!     .len();
//! assert_eq!(boards, 40);
//!
//! // Same input: served from the cache.
//! cache.try_get_or_compute(key, |(deck, config)| deck.compute(config)).unwrap();
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::config::DeckConfig;
use crate::deck::{DeckLayout, RectDeck};
use crate::section::{FreeformInput, FreeformLayout};

/// Cache for rectangular decks, keyed on the deck and its constants.
pub type DeckCache = LayoutCache<(RectDeck, DeckConfig), DeckLayout>;

/// Cache for freeform sketches, keyed on the sketch, options and constants.
pub type FreeformCache = LayoutCache<(FreeformInput, DeckConfig), FreeformLayout>;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    /// Whether a layout is currently stored.
    pub occupied: bool,
    /// Lookups answered from the stored layout.
    pub hits: u64,
    /// Lookups that ran the computation.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Remembers the last layout and the input it was computed from.
#[derive(Debug, Clone)]
pub struct LayoutCache<K, V> {
    entry: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for LayoutCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LayoutCache<K, V> {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Drop the stored layout. The next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Current statistics.
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        CacheStats {
            occupied: self.entry.is_some(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: if total > 0 {
                self.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Reset hit/miss counters without touching the stored layout.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}

impl<K: PartialEq, V> LayoutCache<K, V> {
    /// The stored layout, if it was computed from `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((k, v)) if k == key => Some(v),
            _ => None,
        }
    }

    /// Return the stored layout when `key` matches, otherwise compute, store
    /// and return a new one.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        match self.entry.take() {
            Some((k, v)) if k == key => {
                self.hits += 1;
                tracing::trace!("layout cache hit");
                &self.entry.insert((k, v)).1
            }
            _ => {
                self.misses += 1;
                let v = compute(&key);
                &self.entry.insert((key, v)).1
            }
        }
    }

    /// Like [`get_or_compute`](Self::get_or_compute) for fallible layouts.
    ///
    /// On error nothing is stored and any previous layout is discarded.
    pub fn try_get_or_compute<E, F>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        match self.entry.take() {
            Some((k, v)) if k == key => {
                self.hits += 1;
                tracing::trace!("layout cache hit");
                Ok(&self.entry.insert((k, v)).1)
            }
            _ => {
                self.misses += 1;
                let v = compute(&key)?;
                Ok(&self.entry.insert((key, v)).1)
            }
        }
    }
}
