//! Property coverage for the size-prediction contract.

use cellstore_wire::{predict_size, serialize, PutRequest};
use proptest::prelude::*;

proptest! {
    /// The predicted size is never exceeded by the written bytes, for any
    /// field lengths and any server capability. In this implementation the
    /// accounting is exact, so the buffer is also fully consumed.
    #[test]
    fn prediction_bounds_written_bytes(
        key in proptest::collection::vec(any::<u8>(), 1..64),
        family in proptest::collection::vec(any::<u8>(), 1..=127usize),
        qualifier in proptest::collection::vec(any::<u8>(), 0..64),
        value in proptest::collection::vec(any::<u8>(), 0..256),
        region in proptest::collection::vec(any::<u8>(), 0..1024),
        timestamp in any::<i64>(),
        lock_id in any::<i64>(),
        durable in any::<bool>(),
        capability in any::<u8>(),
    ) {
        let mut put = PutRequest::with_timestamp_and_lock(
            b"t", &key, &family, &qualifier, &value, timestamp, lock_id,
        )
        .unwrap()
        .durability(durable);
        put.bind_region(&region).unwrap();

        let predicted = predict_size(&put).unwrap();
        let bytes = serialize(&put, capability).unwrap();
        prop_assert!(bytes.len() <= predicted);
        prop_assert_eq!(bytes.len(), predicted);
    }

    /// Identical inputs and capability produce byte-identical output.
    #[test]
    fn serialization_is_deterministic(
        key in proptest::collection::vec(any::<u8>(), 1..32),
        value in proptest::collection::vec(any::<u8>(), 0..128),
        timestamp in any::<i64>(),
        capability in any::<u8>(),
    ) {
        let mut put =
            PutRequest::with_timestamp(b"t", &key, b"cf", b"q", &value, timestamp).unwrap();
        put.bind_region(b"t,,1").unwrap();

        let first = serialize(&put, capability).unwrap();
        let second = serialize(&put, capability).unwrap();
        prop_assert_eq!(first, second);
    }
}
