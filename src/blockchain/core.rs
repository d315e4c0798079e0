// core.rs splits the ledger into block, chain, validation and shared-handle submodules.
pub mod block;
pub mod chain;
pub mod shared;
pub mod validation;

pub use block::*;
pub use chain::*;
pub use shared::*;
pub use validation::*;
