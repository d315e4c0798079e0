use crate::crypto::{hash_to_hex, sha256, sha256_concat, Sha256Hash};
use crate::transaction::TransactionRecord;
use serde::{Deserialize, Serialize};

/// Identity hash of a block: `SHA-256(SHA-256(payload) || SHA-256(previous_hash))`.
///
/// Pure function of its inputs. The block index is not part of the hash.
pub fn compute_block_hash(payload: &TransactionRecord, previous_hash: &Sha256Hash) -> Sha256Hash {
    let payload_digest = sha256(&payload.canonical_bytes());
    let link_digest = sha256(previous_hash);
    sha256_concat(&[&payload_digest[..], &link_digest[..]])
}

/// One entry of the ledger. Fields are fixed at construction; there are no
/// setters, so the cached hash can only disagree with the content if the
/// block was decoded from tampered input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    index: u64,
    payload: TransactionRecord,
    #[serde(with = "crate::crypto::hex_hash")]
    previous_hash: Sha256Hash,
    #[serde(with = "crate::crypto::hex_hash")]
    block_hash: Sha256Hash,
}

impl Block {
    pub fn new(index: u64, payload: TransactionRecord, previous_hash: Sha256Hash) -> Self {
        let block_hash = compute_block_hash(&payload, &previous_hash);
        Block {
            index,
            payload,
            previous_hash,
            block_hash,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn payload(&self) -> &TransactionRecord {
        &self.payload
    }

    /// The hash cached at construction.
    pub fn hash(&self) -> Sha256Hash {
        self.block_hash
    }

    pub fn hash_str(&self) -> String {
        hash_to_hex(&self.block_hash)
    }

    pub fn previous_hash(&self) -> Sha256Hash {
        self.previous_hash
    }

    /// Recompute the hash from payload and link and compare it to the cached one.
    pub fn is_hash_valid(&self) -> bool {
        compute_block_hash(&self.payload, &self.previous_hash) == self.block_hash
    }
}

#[cfg(test)]
impl Block {
    pub(crate) fn payload_mut(&mut self) -> &mut TransactionRecord {
        &mut self.payload
    }

    pub(crate) fn set_previous_hash_unchecked(&mut self, previous_hash: Sha256Hash) {
        self.previous_hash = previous_hash;
    }
}
