//! In-memory record store.

/// Insertion-ordered country store backed by a hash map.
pub mod store;
