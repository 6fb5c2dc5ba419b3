//! Mutation operation model and journal wrappers.

use serde::{Deserialize, Serialize};

use crate::{
    country::Country,
    types::{CountryCode, OpSeq},
};

/// Version number for serialized [`StoredOpEnvelope`] payloads.
pub const OP_FORMAT_VERSION: u16 = 1;

/// Immutable operation appended to the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// A new country was stored.
    Insert {
        /// Inserted record.
        country: Country,
    },
    /// A stored country was overwritten.
    Update {
        /// Record after the update.
        country: Country,
        /// Record before the update.
        prev: Country,
    },
    /// A stored country was removed.
    Delete {
        /// Record as it was before removal.
        country: Country,
    },
}

impl Op {
    /// Key of the record this operation touches.
    pub fn code(&self) -> &CountryCode {
        match self {
            Op::Insert { country } | Op::Update { country, .. } | Op::Delete { country } => {
                &country.code
            }
        }
    }

    /// Short kind label stored alongside the payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Op::Insert { .. } => "insert",
            Op::Update { .. } => "update",
            Op::Delete { .. } => "delete",
        }
    }
}

/// Journal row metadata plus operation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOp {
    /// Monotonic operation sequence.
    pub seq: OpSeq,
    /// Operation timestamp in milliseconds.
    pub ts_ms: u64,
    /// Operation body.
    pub op: Op,
}

/// Versioned wrapper for stable on-disk payload decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOpEnvelope {
    /// Payload format version.
    pub format_version: u16,
    /// Wrapped operation.
    pub stored: StoredOp,
}

impl StoredOpEnvelope {
    /// Constructs an envelope using [`OP_FORMAT_VERSION`].
    pub fn new(stored: StoredOp) -> Self {
        Self {
            format_version: OP_FORMAT_VERSION,
            stored,
        }
    }
}
