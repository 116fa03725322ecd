//! # Cellstore client
//!
//! Client-side wire encoding for the Cellstore distributed table store.
//! This facade re-exports the crates that build and serialize single-cell
//! put mutations for transmission over a persistent server connection.
//!
//! ## Quick Start
//!
//! ```
//! use cellstore_client::prelude::*;
//!
//! // Build a put; validation runs here and fails fast.
//! let mut put = PutRequest::new(b"users", b"row-7", b"profile", b"name", b"Alice")?;
//!
//! // Bind the region that owns the row (resolved by the routing layer).
//! put.bind_region(b"users,,1693526400")?;
//!
//! // Predict, then serialize into a single fixed allocation.
//! let predicted = predict_size(&put)?;
//! let bytes = serialize(&put, 29)?;
//! assert_eq!(bytes.len(), predicted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Transport, region resolution, retries and batching live in the
//! connection layer; this crate only models requests and produces their
//! wire bytes.

#![warn(missing_docs)]

pub mod prelude;

// Core types and the cell codec
pub use cellstore_core::{bytes, cell, contract, Cell, ValidationError, TIMESTAMP_NOW};

// Wire encoding
pub use cellstore_wire::{
    predict_size, put_version, serialize, EncodeError, FixedBuffer, PutRequest, RowLock, NO_LOCK,
};
