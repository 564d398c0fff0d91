//! Cache key builders for all Authgate cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses. Backend-level namespacing (the
//! `authgate:` prefix on Redis) is applied by the provider, not here.

/// Cache key for the permission snapshot stored under a fingerprint.
pub fn permission_set(fingerprint: &str) -> String {
    format!("perms:{fingerprint}")
}
