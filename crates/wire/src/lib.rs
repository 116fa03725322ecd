//! Wire encoding for Cellstore put mutations
//!
//! This crate turns a [`PutRequest`] into the length-prefixed binary layout
//! the server expects on a persistent connection. The flow is:
//!
//! 1. build a [`PutRequest`] (validation runs here, failing fast)
//! 2. bind the target region resolved for the row key
//! 3. [`predict_size`] the serialized length
//! 4. [`serialize`] into a single up-front allocation of exactly that size
//!
//! The size prediction is a hard contract: the encoder never grows the
//! buffer, and a write past the predicted bound is a fatal
//! [`EncodeError::PredictionExceeded`] fault, not a resize.
//!
//! ## Example
//!
//! ```
//! use cellstore_wire::{predict_size, serialize, PutRequest};
//!
//! let mut put = PutRequest::new(b"t", b"r1", b"cf", b"q1", b"v1")?;
//! put.bind_region(b"t,,1")?;
//!
//! let predicted = predict_size(&put)?;
//! let bytes = serialize(&put, 29)?;
//! assert_eq!(bytes.len(), predicted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;
mod encoder;
mod error;
mod put;
mod version;

pub use buffer::FixedBuffer;
pub use encoder::{predict_size, serialize, PUT_FORMAT_VERSION};
pub use error::EncodeError;
pub use put::{PutRequest, RowLock, NO_LOCK, PUT_CODE};
pub use version::{put_version, CAPABILITY_ATTRIBUTES};
