//! crates/murmur-core/src/hash.rs
//! FNV-1a 32-bit hashing for deduplication fingerprints and stable
//! pseudo-random selection.
//!
//! The seeded form chains two strings into one order-sensitive fingerprint:
//! hashing `B` starting from `fnv1a_32(A)` yields a different value than
//! hashing `A` starting from `fnv1a_32(B)` for typical inputs. No security
//! property is required or provided.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hashes a string with FNV-1a 32, starting from the canonical offset basis.
///
/// The hash runs over the UTF-8 bytes of `s`. Values are stable within one
/// running process; cross-process stability is not promised.
#[must_use]
pub fn fnv1a_32(s: &str) -> u32 {
    fnv1a_32_seeded(s, FNV_OFFSET_BASIS)
}

/// Hashes a string with FNV-1a 32, starting from an explicit seed.
///
/// Passing the hash of a previous string as `seed` chains the two strings
/// into one deterministic, order-sensitive fingerprint.
#[must_use]
pub fn fnv1a_32_seeded(s: &str, seed: u32) -> u32 {
    let mut hash = seed;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Picks a deterministic element of `collection` for `key`.
///
/// The index is `fnv1a_32(key) % collection.len()`, so the same key always
/// maps to the same element for a fixed collection. Returns `None` when the
/// collection is empty; callers wanting infallible selection must guarantee a
/// non-empty collection.
#[must_use]
pub fn element_from_hash<'a, T>(collection: &'a [T], key: &str) -> Option<&'a T> {
    if collection.is_empty() {
        return None;
    }
    let index = fnv1a_32(key) as usize % collection.len();
    collection.get(index)
}
