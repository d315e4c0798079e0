// Thin re-export module: implementation is in `blockchain/core.rs`, split by
// responsibility (block hashing, chain management, validation, sharing).

pub mod core;
pub use self::core::*;
