//! Request epochs.
//!
//! Every async operation that writes into shared state takes an epoch
//! before suspending and checks it on arrival. Any newer operation (or a
//! logout) advances the counter, so a late response from an older request
//! is recognized as stale and discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// A tag identifying one generation of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    /// The raw generation number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter.
#[derive(Debug, Default)]
pub struct EpochCounter {
    current: AtomicU64,
}

impl EpochCounter {
    /// Create a counter at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every earlier epoch.
    pub fn advance(&self) -> Epoch {
        Epoch(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// The latest generation.
    pub fn current(&self) -> Epoch {
        Epoch(self.current.load(Ordering::Acquire))
    }

    /// Whether `epoch` is still the latest generation.
    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.current() == epoch
    }
}
