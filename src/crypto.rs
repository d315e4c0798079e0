//! Hashing primitives for TallyChain

use crate::error::ChainError;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 digest.
pub type Sha256Hash = [u8; 32];

/// Link value of the genesis block: the SHA-256 of the integer 0 encoded as
/// a little-endian u64. Fixed across runs so exported chains re-validate.
pub static GENESIS_SEED: Lazy<Sha256Hash> = Lazy::new(|| sha256(&0u64.to_le_bytes()));

/// SHA-256 of a single byte slice.
pub fn sha256(data: &[u8]) -> Sha256Hash {
    Sha256::digest(data).into()
}

/// SHA-256 over the concatenation of `parts`, without intermediate copies.
pub fn sha256_concat(parts: &[&[u8]]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Convert a hash to a hex string for display.
pub fn hash_to_hex(hash: &Sha256Hash) -> String {
    hex::encode(hash)
}

/// Convert a hex string to a hash.
pub fn hash_from_hex(hex_str: &str) -> Result<Sha256Hash, ChainError> {
    let bytes = hex::decode(hex_str)
        .map_err(|e| ChainError::SerializationError(format!("Invalid hex hash: {}", e)))?;
    if bytes.len() != 32 {
        return Err(ChainError::SerializationError(format!(
            "Hash must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    bytes
        .try_into()
        .map_err(|_| {
            ChainError::SerializationError("Failed to convert bytes into hash".to_string())
        })
}

/// Serde adapter that writes hashes as lowercase hex strings, so exported
/// chains stay readable and hand-editable.
pub mod hex_hash {
    use super::{hash_from_hex, hash_to_hex, Sha256Hash};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &Sha256Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hash_to_hex(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Sha256Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        hash_from_hex(&s).map_err(serde::de::Error::custom)
    }
}
