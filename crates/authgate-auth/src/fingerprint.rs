//! Deterministic permission-set fingerprinting.

use sha2::{Digest, Sha256};

/// Computes the fingerprint of a serialized permission set.
///
/// Total and pure: SHA-256 over the serialized bytes, rendered as lowercase
/// hex. The caller serializes the set once (in its natural insertion order)
/// and reuses the same bytes as the cached snapshot value, so the digest
/// and the snapshot stored under it can never disagree.
pub fn fingerprint(serialized: &[u8]) -> String {
    hex::encode(Sha256::digest(serialized))
}
