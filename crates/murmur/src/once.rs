//! crates/murmur/src/once.rs
//! Seen-message tracking for once-mode suppression.

use murmur_core::hash::{fnv1a_32, fnv1a_32_seeded};
use rustc_hash::FxHashSet;

/// Tracks which (system, message) pairs have already been emitted in once
/// mode.
///
/// Pairs are fingerprinted with chained FNV-1a 32: the message is hashed
/// first and its hash seeds the system hash. The chain is order-sensitive, so
/// the message-first ordering is part of the registry's contract and must not
/// change while fingerprints are live. The set grows monotonically until
/// [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct OnceRegistry {
    seen: FxHashSet<u32>,
}

impl OnceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a (system, message) pair as emitted.
    ///
    /// Returns `true` and records the pair on its first occurrence; returns
    /// `false` for a pair already seen.
    pub fn try_mark(&mut self, system: &str, message: &str) -> bool {
        let hash = fnv1a_32_seeded(system, fnv1a_32(message));
        self.seen.insert(hash)
    }

    /// Forgets every seen pair. Idempotent.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::OnceRegistry;

    #[test]
    fn first_mark_succeeds_repeats_fail() {
        let mut registry = OnceRegistry::new();
        assert!(registry.try_mark("Physics", "solver diverged"));
        assert!(!registry.try_mark("Physics", "solver diverged"));
        assert!(!registry.try_mark("Physics", "solver diverged"));
    }

    #[test]
    fn system_and_message_both_distinguish_pairs() {
        let mut registry = OnceRegistry::new();
        assert!(registry.try_mark("Physics", "ready"));
        assert!(registry.try_mark("AI", "ready"));
        assert!(registry.try_mark("Physics", "stopped"));
    }

    #[test]
    fn swapped_system_and_message_are_distinct() {
        // The chain hashes message first, system second, so swapping the two
        // strings produces a different fingerprint.
        let mut registry = OnceRegistry::new();
        assert!(registry.try_mark("alpha", "beta"));
        assert!(registry.try_mark("beta", "alpha"));
    }

    #[test]
    fn clear_resets_suppression() {
        let mut registry = OnceRegistry::new();
        assert!(registry.try_mark("Physics", "ready"));
        registry.clear();
        registry.clear();
        assert!(registry.try_mark("Physics", "ready"));
    }
}
