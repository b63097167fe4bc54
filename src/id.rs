//! Board id allocation.
//!
//! Ids come from an explicit monotonically increasing sequence rather than a
//! hidden global counter, so tests can inject a deterministic sequence. A
//! process-wide default covers ordinary use.

use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonically increasing id source for boards.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU32,
}

impl IdSequence {
    /// Creates a sequence starting at zero.
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }

    /// Returns the next id, advancing the sequence.
    pub fn next_id(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of ids issued so far, which is also the number of boards the
    /// sequence has served.
    pub fn issued(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }

    /// The process-wide default sequence.
    pub fn global() -> &'static IdSequence {
        static GLOBAL: IdSequence = IdSequence::new();
        &GLOBAL
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
