//! End-to-end checks through the facade: build, route, predict, serialize.

use cellstore_client::prelude::*;

#[test]
fn full_flow_produces_predicted_bytes() {
    let mut put = PutRequest::with_timestamp(b"users", b"row-7", b"profile", b"name", b"Alice", 42)
        .unwrap();
    put.bind_region(b"users,,1693526400").unwrap();

    // capability 29 negotiates header version 2; the put bytes are the same
    assert_eq!(put_version(29), 2);

    let predicted = predict_size(&put).unwrap();
    let bytes = serialize(&put, 29).unwrap();
    assert_eq!(bytes.len(), predicted);
}

#[test]
fn validation_surfaces_before_any_encoding() {
    assert_eq!(
        PutRequest::new(b"users", b"row-7", b"", b"q", b"v"),
        Err(ValidationError::EmptyFamily)
    );
}

#[test]
fn encoding_requires_a_routed_request() {
    let put = PutRequest::new(b"users", b"row-7", b"profile", b"q", b"v").unwrap();
    assert_eq!(serialize(&put, 0), Err(EncodeError::RegionUnbound));
}

#[test]
fn generic_code_reads_fields_through_capability_traits() {
    fn row_of(req: &impl HasKey) -> Vec<u8> {
        req.key().to_vec()
    }
    let put = PutRequest::new(b"users", b"row-7", b"profile", b"q", b"v").unwrap();
    assert_eq!(row_of(&put), b"row-7");
}

#[test]
fn explicit_cell_round_trips_into_a_put() {
    let cell = Cell::new(b"row-7", b"profile", b"name", b"Alice", 42).unwrap();
    let mut put = PutRequest::from_cell(b"users", &cell, RowLock::new(NO_LOCK)).unwrap();
    put.bind_region(b"users,,1").unwrap();

    let bytes = serialize(&put, 0).unwrap();
    assert_eq!(bytes.len(), predict_size(&put).unwrap());
    // the cell payload is the tail of the record
    let payload_len = cell.predicted_size();
    let mut payload = Vec::new();
    cell.write_to(&mut payload).unwrap();
    assert_eq!(&bytes[bytes.len() - payload_len..], &payload[..]);
}

#[test]
fn server_timestamp_sentinel_survives_encoding() {
    let mut put = PutRequest::new(b"users", b"row-7", b"profile", b"name", b"Alice").unwrap();
    put.bind_region(b"users,,1").unwrap();
    let bytes = serialize(&put, 0).unwrap();
    let sentinel = TIMESTAMP_NOW.to_be_bytes();
    assert!(bytes.windows(8).any(|w| w == &sentinel[..]));
}
