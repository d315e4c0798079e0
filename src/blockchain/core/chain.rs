use crate::blockchain::core::block::Block;
use crate::blockchain::core::validation::{find_fault, ChainFault};
use crate::config::{Config, IndexPolicy};
use crate::crypto::GENESIS_SEED;
use crate::error::ChainError;
use crate::transaction::{TransactionRecord, SENTINEL_KEY};
use tracing::{debug, info, warn};

// Every constructor either creates genesis or rejects an empty block list.
const GENESIS_PRESENT: &str = "chain invariant violated: genesis block missing";

/// An in-memory, append-only sequence of hash-linked blocks.
///
/// Never empty: position 0 always holds the genesis block.
#[derive(Debug, Clone)]
pub struct Blockchain {
    blocks: Vec<Block>,
    index_policy: IndexPolicy,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Create a chain whose genesis block carries the sentinel parties and the
    /// current time.
    pub fn new() -> Self {
        Self::with_genesis(
            TransactionRecord::sentinel(SENTINEL_KEY, SENTINEL_KEY, chrono::Utc::now().timestamp()),
            IndexPolicy::default(),
        )
    }

    pub fn with_config(config: &Config) -> Self {
        let genesis = &config.genesis;
        let timestamp = genesis.timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());
        Self::with_genesis(
            TransactionRecord::sentinel(
                genesis.sender_key.clone(),
                genesis.receiver_key.clone(),
                timestamp,
            ),
            config.chain.index_policy,
        )
    }

    fn with_genesis(payload: TransactionRecord, index_policy: IndexPolicy) -> Self {
        let genesis = Block::new(0, payload, *GENESIS_SEED);
        info!("Created genesis block {}", genesis.hash_str());
        Blockchain {
            blocks: vec![genesis],
            index_policy,
        }
    }

    /// Rebuild a chain from previously exported blocks.
    ///
    /// Stored hashes are kept as-is, so a tampered export loads fine and then
    /// reports `is_valid() == false`.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, ChainError> {
        Self::from_blocks_with_policy(blocks, IndexPolicy::default())
    }

    pub fn from_blocks_with_policy(
        blocks: Vec<Block>,
        index_policy: IndexPolicy,
    ) -> Result<Self, ChainError> {
        if blocks.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        info!("Loaded chain of {} block(s)", blocks.len());
        Ok(Blockchain { blocks, index_policy })
    }

    /// Link `payload` to the current tail and push it as a new block.
    pub fn append(&mut self, payload: TransactionRecord) {
        let index = self.index_policy.next_index(self.blocks.len());
        let previous_hash = self.latest().hash();
        let block = Block::new(index, payload, previous_hash);
        debug!("Appending block {} at index {}", block.hash_str(), index);
        self.blocks.push(block);
    }

    pub fn latest(&self) -> &Block {
        self.blocks.last().expect(GENESIS_PRESENT)
    }

    pub fn genesis(&self) -> &Block {
        self.blocks.first().expect(GENESIS_PRESENT)
    }

    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept alongside `len` for the usual collection API.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn index_policy(&self) -> IndexPolicy {
        self.index_policy
    }

    /// First integrity failure, or `None` for an intact chain.
    pub fn first_fault(&self) -> Option<ChainFault> {
        find_fault(&self.blocks)
    }

    pub fn is_valid(&self) -> bool {
        match self.first_fault() {
            None => true,
            Some(fault) => {
                warn!("Chain validation failed: {}", fault);
                false
            }
        }
    }

    /// Export as JSON.
    ///
    /// JSON has no NaN or infinity, so a chain holding a non-finite amount
    /// cannot be exported this way; use [`to_bytes`](Self::to_bytes) instead.
    pub fn to_json(&self) -> Result<String, ChainError> {
        let non_finite = self.blocks.iter().position(|b| !b.payload().amount.is_finite());
        if let Some(position) = non_finite {
            return Err(ChainError::SerializationError(format!(
                "block at position {} has a non-finite amount, which JSON cannot represent",
                position
            )));
        }
        Ok(serde_json::to_string_pretty(&self.blocks)?)
    }

    /// Import a JSON export. The chain uses the default index policy for
    /// later appends; see [`from_json_with_policy`](Self::from_json_with_policy).
    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        Self::from_json_with_policy(json, IndexPolicy::default())
    }

    pub fn from_json_with_policy(
        json: &str,
        index_policy: IndexPolicy,
    ) -> Result<Self, ChainError> {
        let blocks: Vec<Block> = serde_json::from_str(json)?;
        Self::from_blocks_with_policy(blocks, index_policy)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ChainError> {
        Ok(bincode::serialize(&self.blocks)?)
    }

    /// Import a bincode export with the default index policy.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ChainError> {
        Self::from_bytes_with_policy(bytes, IndexPolicy::default())
    }

    pub fn from_bytes_with_policy(
        bytes: &[u8],
        index_policy: IndexPolicy,
    ) -> Result<Self, ChainError> {
        let blocks: Vec<Block> = bincode::deserialize(bytes)?;
        Self::from_blocks_with_policy(blocks, index_policy)
    }
}

impl<'a> IntoIterator for &'a Blockchain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
impl Blockchain {
    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}
