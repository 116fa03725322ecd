//! Cell record codec
//!
//! A cell is the (row, family, qualifier, timestamp) → value unit the server
//! stores. On the wire it is a self-describing record:
//!
//! ```text
//! +-----------+-------------+------------+-----+------------+--------+-----------+-----------+-----------+-------+
//! | key len   | value len   | row len    | row | family len | family | qualifier | timestamp | cell type | value |
//! | u32 BE    | u32 BE      | u16 BE     | N   | u8         | N      | N         | i64 BE    | u8        | N     |
//! +-----------+-------------+------------+-----+------------+--------+-----------+-----------+-----------+-------+
//! ```
//!
//! where "key len" covers everything from the row length through the cell
//! type byte. [`Cell::predicted_size`] is exact: it returns precisely the
//! number of bytes [`Cell::write_to`] produces, which is what lets the wire
//! encoder size its output buffer up front.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::error::ValidationError;

/// Timestamp sentinel: let the server assign wall-clock time when the
/// mutation is applied. Passed through the encoder unmodified, never
/// resolved client-side.
pub const TIMESTAMP_NOW: i64 = i64::MAX;

/// Cell-type byte for a put record.
pub const CELL_TYPE_PUT: u8 = 4;

/// Maximum row key length. The row length field is a u16, but the wire
/// layer's 3-byte length prefix convention caps keys at 32767.
pub const MAX_KEY_LEN: usize = 32767;

/// Maximum column family length. The family length prefix is a single byte
/// and the server reserves the high bit.
pub const MAX_FAMILY_LEN: usize = 127;

/// Maximum column qualifier length.
pub const MAX_QUALIFIER_LEN: usize = 32767;

/// Maximum value length. The value length field is serialized as a u32 but
/// the server rejects values past i32::MAX.
pub const MAX_VALUE_LEN: usize = i32::MAX as usize;

/// An immutable cell, borrowing the caller's byte slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    key: &'a [u8],
    family: &'a [u8],
    qualifier: &'a [u8],
    value: &'a [u8],
    timestamp: i64,
}

impl<'a> Cell<'a> {
    /// Build a cell, validating every field.
    ///
    /// Fails with a [`ValidationError`] naming the offending field; no
    /// partial cell is returned.
    pub fn new(
        key: &'a [u8],
        family: &'a [u8],
        qualifier: &'a [u8],
        value: &'a [u8],
        timestamp: i64,
    ) -> Result<Self, ValidationError> {
        check_key(key)?;
        check_family(family)?;
        check_qualifier(qualifier)?;
        check_value(value)?;
        Ok(Self::new_unchecked(key, family, qualifier, value, timestamp))
    }

    /// Build a cell from fields that have already passed the `check_*`
    /// functions. Lengths beyond the prefix-field limits would corrupt the
    /// record, so this is only for re-assembling already-validated fields.
    pub fn new_unchecked(
        key: &'a [u8],
        family: &'a [u8],
        qualifier: &'a [u8],
        value: &'a [u8],
        timestamp: i64,
    ) -> Self {
        Cell {
            key,
            family,
            qualifier,
            value,
            timestamp,
        }
    }

    /// The row key.
    pub fn key(&self) -> &'a [u8] {
        self.key
    }

    /// The column family.
    pub fn family(&self) -> &'a [u8] {
        self.family
    }

    /// The column qualifier.
    pub fn qualifier(&self) -> &'a [u8] {
        self.qualifier
    }

    /// The value.
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// The timestamp, possibly the [`TIMESTAMP_NOW`] sentinel.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Bytes covered by the key-length field: row length through cell type.
    fn key_section_len(&self) -> usize {
        2 + self.key.len() + 1 + self.family.len() + self.qualifier.len() + 8 + 1
    }

    /// Exact serialized length of this cell.
    pub fn predicted_size(&self) -> usize {
        4 + 4 + self.key_section_len() + self.value.len()
    }

    /// Serialize the cell record.
    ///
    /// Writes exactly [`predicted_size`](Self::predicted_size) bytes.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u32::<BigEndian>(self.key_section_len() as u32)?;
        w.write_u32::<BigEndian>(self.value.len() as u32)?;
        w.write_u16::<BigEndian>(self.key.len() as u16)?;
        w.write_all(self.key)?;
        w.write_u8(self.family.len() as u8)?;
        w.write_all(self.family)?;
        w.write_all(self.qualifier)?;
        w.write_i64::<BigEndian>(self.timestamp)?;
        w.write_u8(CELL_TYPE_PUT)?;
        w.write_all(self.value)
    }
}

/// Validate a row key: non-empty, at most [`MAX_KEY_LEN`] bytes.
pub fn check_key(key: &[u8]) -> Result<(), ValidationError> {
    if key.is_empty() {
        Err(ValidationError::EmptyKey)
    } else if key.len() > MAX_KEY_LEN {
        Err(ValidationError::KeyTooLong { len: key.len() })
    } else {
        Ok(())
    }
}

/// Validate a column family: non-empty, at most [`MAX_FAMILY_LEN`] bytes.
pub fn check_family(family: &[u8]) -> Result<(), ValidationError> {
    if family.is_empty() {
        Err(ValidationError::EmptyFamily)
    } else if family.len() > MAX_FAMILY_LEN {
        Err(ValidationError::FamilyTooLong { len: family.len() })
    } else {
        Ok(())
    }
}

/// Validate a column qualifier: may be empty, at most
/// [`MAX_QUALIFIER_LEN`] bytes.
pub fn check_qualifier(qualifier: &[u8]) -> Result<(), ValidationError> {
    if qualifier.len() > MAX_QUALIFIER_LEN {
        Err(ValidationError::QualifierTooLong {
            len: qualifier.len(),
        })
    } else {
        Ok(())
    }
}

/// Validate a value: may be empty, at most [`MAX_VALUE_LEN`] bytes.
pub fn check_value(value: &[u8]) -> Result<(), ValidationError> {
    if value.len() > MAX_VALUE_LEN {
        Err(ValidationError::ValueTooLong { len: value.len() })
    } else {
        Ok(())
    }
}


#[cfg(test)]
mod size_props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For every valid field combination, the predicted size is exactly
        /// the number of bytes the record serializes to.
        #[test]
        fn predicted_size_always_exact(
            key in proptest::collection::vec(any::<u8>(), 1..256),
            family in proptest::collection::vec(any::<u8>(), 1..=127usize),
            qualifier in proptest::collection::vec(any::<u8>(), 0..256),
            value in proptest::collection::vec(any::<u8>(), 0..1024),
            timestamp in any::<i64>(),
        ) {
            let cell = Cell::new(&key, &family, &qualifier, &value, timestamp).unwrap();
            let mut out = Vec::new();
            cell.write_to(&mut out).unwrap();
            prop_assert_eq!(out.len(), cell.predicted_size());
        }
    }
}
