//! Thread-safe handle around a [`Blockchain`].
//!
//! Appends take the write lock and everything else takes the read lock, so a
//! validation pass never observes a half-finished append.

use crate::blockchain::core::block::Block;
use crate::blockchain::core::chain::Blockchain;
use crate::blockchain::core::validation::ChainFault;
use crate::transaction::TransactionRecord;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedBlockchain {
    inner: Arc<RwLock<Blockchain>>,
}

impl SharedBlockchain {
    pub fn new(chain: Blockchain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    pub fn append(&self, payload: TransactionRecord) {
        self.inner.write().append(payload);
    }

    pub fn is_valid(&self) -> bool {
        self.inner.read().is_valid()
    }

    pub fn first_fault(&self) -> Option<ChainFault> {
        self.inner.read().first_fault()
    }

    /// Owned copy of the tail block.
    pub fn latest(&self) -> Block {
        self.inner.read().latest().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Borrow the chain for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Blockchain> {
        self.inner.read()
    }
}

impl From<Blockchain> for SharedBlockchain {
    fn from(chain: Blockchain) -> Self {
        Self::new(chain)
    }
}
