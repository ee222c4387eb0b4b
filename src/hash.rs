//! Identity hashing for deterministic trait derivation.
//!
//! Every behavioral trait in this crate is a pure function of an opaque
//! entity identifier. The hash is a rolling multiply-and-add over the
//! identifier's UTF-16 code units, folded into a 32-bit signed range and
//! made non-negative. It is cheap and sensitive to every character;
//! cryptographic strength is not required because the output only seeds
//! bucket selection, never security decisions.

/// Hash an entity identifier to a non-negative integer.
///
/// Deterministic across calls and processes. An empty identifier hashes
/// to 0, which is the documented fallback for missing identifiers rather
/// than an error: every catalog table has a defined bucket at roll 0.
pub fn entity_hash(identifier: &str) -> u64 {
    let mut hash: i32 = 0;
    for unit in identifier.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    u64::from(hash.unsigned_abs())
}

/// Hash an identifier salted with a trait name.
///
/// Used by the opt-in decorrelated derivation mode so that independent
/// trait tables draw from independent rolls instead of sharing one hash.
pub fn salted_hash(identifier: &str, salt: &str) -> u64 {
    entity_hash(&format!("{identifier}:{salt}"))
}
