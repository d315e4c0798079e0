use crate::blockchain::core::block::Block;
use std::fmt;

/// First integrity failure found while walking a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFault {
    /// The block's cached hash no longer matches its payload and link.
    HashMismatch { position: usize },
    /// The block's link does not match its predecessor's hash.
    BrokenLink { position: usize },
}

impl ChainFault {
    pub fn position(&self) -> usize {
        match self {
            ChainFault::HashMismatch { position } | ChainFault::BrokenLink { position } => {
                *position
            }
        }
    }
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainFault::HashMismatch { position } => {
                write!(f, "block at position {} does not match its stored hash", position)
            }
            ChainFault::BrokenLink { position } => write!(
                f,
                "block at position {} does not link to its predecessor",
                position
            ),
        }
    }
}

/// Walk `blocks` from genesis to tail and return the first fault.
///
/// Each block is first checked against its own hash, then (past genesis)
/// against its predecessor's hash.
pub fn find_fault(blocks: &[Block]) -> Option<ChainFault> {
    for (position, block) in blocks.iter().enumerate() {
        if !block.is_hash_valid() {
            return Some(ChainFault::HashMismatch { position });
        }

        if position > 0 && block.previous_hash() != blocks[position - 1].hash() {
            return Some(ChainFault::BrokenLink { position });
        }
    }
    None
}
