//! Transaction record carried by each TallyChain block
use serde::{Deserialize, Serialize};

/// Sentinel key used for both parties of the genesis record.
pub const SENTINEL_KEY: &str = "None";

/// A transfer between two parties. No invariants are enforced on the fields:
/// there is no balance check and no signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub amount: f64,
    pub sender_key: String,
    pub receiver_key: String,
    /// UNIX timestamp, seconds.
    pub timestamp: i64,
}

impl TransactionRecord {
    pub fn new(
        amount: f64,
        sender_key: impl Into<String>,
        receiver_key: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        TransactionRecord {
            amount,
            sender_key: sender_key.into(),
            receiver_key: receiver_key.into(),
            timestamp,
        }
    }

    /// Build a record stamped with the current wall-clock time.
    pub fn now(
        amount: f64,
        sender_key: impl Into<String>,
        receiver_key: impl Into<String>,
    ) -> Self {
        Self::new(amount, sender_key, receiver_key, chrono::Utc::now().timestamp())
    }

    /// Zero-amount record between two sentinel parties, used for genesis.
    pub fn sentinel(
        sender_key: impl Into<String>,
        receiver_key: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self::new(0.0, sender_key, receiver_key, timestamp)
    }

    /// Canonical byte encoding fed to the block hash.
    ///
    /// Field order is amount, receiver, sender, timestamp. Strings are
    /// prefixed with their u64 little-endian length so that no two distinct
    /// records share an encoding.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(32 + self.sender_key.len() + self.receiver_key.len());
        bytes.extend_from_slice(&self.amount.to_bits().to_le_bytes());
        bytes.extend_from_slice(&(self.receiver_key.len() as u64).to_le_bytes());
        bytes.extend_from_slice(self.receiver_key.as_bytes());
        bytes.extend_from_slice(&(self.sender_key.len() as u64).to_le_bytes());
        bytes.extend_from_slice(self.sender_key.as_bytes());
        bytes.extend_from_slice(&self.timestamp.to_le_bytes());
        bytes
    }

    /// Timestamp rendered as RFC 3339, or the raw seconds when out of range.
    pub fn timestamp_rfc3339(&self) -> String {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}
