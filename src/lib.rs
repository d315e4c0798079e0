//! TallyChain - a minimal append-only ledger with tamper-evident hash links
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`blockchain`] - Blocks, the chain, integrity validation and a shared handle
//! - [`transaction`] - Transaction records carried by blocks
//!
//! ## Cryptography
//! - [`crypto`] - SHA-256 helpers and the genesis seed
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use tallychain::blockchain::Blockchain;
//! use tallychain::transaction::TransactionRecord;
//!
//! let mut chain = Blockchain::new();
//! chain.append(TransactionRecord::new(1.5, "Nathan", "jeff", 1_588_700_000));
//! assert_eq!(chain.len(), 2);
//! assert!(chain.is_valid());
//! ```

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod blockchain;
pub mod transaction;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
