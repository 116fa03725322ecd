//! Core types for the Cellstore client
//!
//! This crate holds the pieces shared by every RPC the client encodes:
//!
//! - [`cell`]: the self-describing cell record codec (exact size prediction,
//!   serialization, field validation)
//! - [`contract`]: capability traits exposing the byte fields an RPC carries
//! - [`bytes`]: diagnostic rendering and the variable-width length encoding
//! - [`error`]: validation errors raised at request construction
//!
//! ## A note on byte slices
//!
//! All byte fields are borrowed, never copied. The borrow checker guarantees
//! the caller's buffers outlive the value holding them, so the no-copy
//! aliasing costs nothing in safety.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod cell;
pub mod contract;
pub mod error;

pub use cell::{
    Cell, CELL_TYPE_PUT, MAX_FAMILY_LEN, MAX_KEY_LEN, MAX_QUALIFIER_LEN, MAX_VALUE_LEN,
    TIMESTAMP_NOW,
};
pub use contract::{HasFamily, HasKey, HasQualifier, HasTable, HasValue};
pub use error::ValidationError;
