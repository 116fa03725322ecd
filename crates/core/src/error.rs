//! Validation errors raised when constructing a request
//!
//! These are recoverable caller errors: the offending field is named, no
//! partial object is ever returned, and the caller can fix its input and
//! retry. Encoding-time faults live in the wire crate.

use thiserror::Error;

/// A request field failed validation at construction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Table name was empty.
    #[error("table name must not be empty")]
    EmptyTable,

    /// Row key was empty.
    #[error("row key must not be empty")]
    EmptyKey,

    /// Row key exceeded the 32767-byte limit.
    #[error("row key is {len} bytes, limit is 32767")]
    KeyTooLong {
        /// Length of the rejected key.
        len: usize,
    },

    /// Column family was empty.
    #[error("column family must not be empty")]
    EmptyFamily,

    /// Column family exceeded the 127-byte limit.
    #[error("column family is {len} bytes, limit is 127")]
    FamilyTooLong {
        /// Length of the rejected family.
        len: usize,
    },

    /// Column qualifier exceeded the 32767-byte limit.
    #[error("column qualifier is {len} bytes, limit is 32767")]
    QualifierTooLong {
        /// Length of the rejected qualifier.
        len: usize,
    },

    /// Value exceeded the 2 GiB limit.
    #[error("value is {len} bytes, limit is 2147483647")]
    ValueTooLong {
        /// Length of the rejected value.
        len: usize,
    },
}
