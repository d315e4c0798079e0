//! Transaction payloads carried by blocks

pub mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_fields() {
        let record = TransactionRecord::new(1.5, "Nathan", "jeff", 1_588_700_000);
        assert_eq!(record.amount, 1.5);
        assert_eq!(record.sender_key, "Nathan");
        assert_eq!(record.receiver_key, "jeff");
        assert_eq!(record.timestamp, 1_588_700_000);
    }

    #[test]
    fn test_sentinel_record() {
        let record = TransactionRecord::sentinel(SENTINEL_KEY, SENTINEL_KEY, 42);
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.sender_key, "None");
        assert_eq!(record.receiver_key, "None");
    }

    #[test]
    fn test_canonical_bytes_layout() {
        let record = TransactionRecord::new(1.5, "ab", "c", 7);
        let bytes = record.canonical_bytes();

        // 8 (amount) + 8 + 1 (receiver) + 8 + 2 (sender) + 8 (timestamp)
        assert_eq!(bytes.len(), 35);
        assert_eq!(&bytes[..8], &1.5f64.to_bits().to_le_bytes());
        assert_eq!(&bytes[8..16], &1u64.to_le_bytes());
        assert_eq!(bytes[16], b'c');
        assert_eq!(&bytes[17..25], &2u64.to_le_bytes());
        assert_eq!(&bytes[25..27], b"ab");
        assert_eq!(&bytes[27..], &7i64.to_le_bytes());
    }

    #[test]
    fn test_canonical_bytes_separates_keys() {
        // Plain concatenation would make these two records collide.
        let a = TransactionRecord::new(1.0, "ab", "c", 0);
        let b = TransactionRecord::new(1.0, "b", "ca", 0);
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn test_swapped_parties_differ() {
        let a = TransactionRecord::new(1.0, "alice", "bob", 0);
        let b = TransactionRecord::new(1.0, "bob", "alice", 0);
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn test_timestamp_rfc3339() {
        let record = TransactionRecord::new(0.0, "a", "b", 0);
        assert_eq!(record.timestamp_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_now_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let record = TransactionRecord::now(2.0, "a", "b");
        let after = chrono::Utc::now().timestamp();
        assert!(record.timestamp >= before && record.timestamp <= after);
    }
}
