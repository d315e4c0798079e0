//! Error types for TallyChain
//!
//! Validation failures are not errors: a chain that fails its integrity walk
//! reports `false` from [`Blockchain::is_valid`](crate::blockchain::Blockchain::is_valid).
//! `ChainError` covers broken preconditions and the ambient layers (config,
//! import/export).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// A chain must always hold at least its genesis block.
    #[error("Chain invariant violated: a chain must contain at least one block")]
    EmptyChain,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Bincode error: {0}")]
    BincodeError(String),
}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

impl From<Box<bincode::ErrorKind>> for ChainError {
    fn from(err: Box<bincode::ErrorKind>) -> Self {
        ChainError::BincodeError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_message() {
        assert_eq!(
            ChainError::EmptyChain.to_string(),
            "Chain invariant violated: a chain must contain at least one block"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: ChainError = serde_json::from_str::<u64>("not json").unwrap_err().into();
        assert!(matches!(err, ChainError::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
