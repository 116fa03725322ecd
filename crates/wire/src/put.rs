//! Single-cell put mutation
//!
//! [`PutRequest`] is the immutable value object behind a "put a cell" RPC.
//! All byte fields are borrowed from the caller, never copied; the borrow
//! checker pins the caller's buffers for the life of the request.
//!
//! ## A note on timestamps
//!
//! The server orders versions of a cell strictly by timestamp value,
//! regardless of arrival order. If you put with timestamp `T` and later put
//! the same (table, key, family, qualifier) with `T - 1`, the second write
//! reads back as the older version even though it arrived last. Callers
//! choosing explicit timestamps must pick monotonically increasing values
//! per cell — the encoder does not enforce this. To let the server stamp
//! the write at apply time, use [`TIMESTAMP_NOW`].

use std::fmt;

use cellstore_core::bytes::pretty;
use cellstore_core::cell::{check_family, check_key, check_qualifier, check_value};
use cellstore_core::contract::{HasFamily, HasKey, HasQualifier, HasTable, HasValue};
use cellstore_core::{Cell, ValidationError, TIMESTAMP_NOW};

use crate::error::EncodeError;

/// Lock-id sentinel: no explicit row lock is held.
pub const NO_LOCK: i64 = -1;

/// Type-tag byte identifying a put on the wire.
pub const PUT_CODE: u8 = 35;

/// An explicit row-lock token, obtained from the server out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLock(i64);

impl RowLock {
    /// Wrap a lock id returned by the server.
    pub fn new(id: i64) -> Self {
        RowLock(id)
    }

    /// The raw lock id.
    pub fn id(&self) -> i64 {
        self.0
    }
}

/// A single-cell put, immutable once constructed.
///
/// The one exception to immutability is the target region, which is absent
/// at construction and bound exactly once by the region resolution step
/// before encoding. The struct provides no synchronization for that bind;
/// the dispatcher must make it visible to the encoding thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest<'a> {
    table: &'a [u8],
    key: &'a [u8],
    family: &'a [u8],
    qualifier: &'a [u8],
    value: &'a [u8],
    timestamp: i64,
    lock_id: i64,
    durable: bool,
    bufferable: bool,
    region: Option<&'a [u8]>,
}

impl<'a> PutRequest<'a> {
    /// Build a put with the server-assigned timestamp and no row lock.
    ///
    /// Fails fast with a [`ValidationError`] naming the offending field.
    pub fn new(
        table: &'a [u8],
        key: &'a [u8],
        family: &'a [u8],
        qualifier: &'a [u8],
        value: &'a [u8],
    ) -> Result<Self, ValidationError> {
        Self::with_timestamp_and_lock(table, key, family, qualifier, value, TIMESTAMP_NOW, NO_LOCK)
    }

    /// Build a put with an explicit timestamp and no row lock.
    pub fn with_timestamp(
        table: &'a [u8],
        key: &'a [u8],
        family: &'a [u8],
        qualifier: &'a [u8],
        value: &'a [u8],
        timestamp: i64,
    ) -> Result<Self, ValidationError> {
        Self::with_timestamp_and_lock(table, key, family, qualifier, value, timestamp, NO_LOCK)
    }

    /// Canonical constructor: explicit timestamp and lock id.
    ///
    /// Every other constructor funnels here. `timestamp` may be
    /// [`TIMESTAMP_NOW`] and `lock_id` may be [`NO_LOCK`]; both sentinels
    /// pass through to the wire unmodified.
    pub fn with_timestamp_and_lock(
        table: &'a [u8],
        key: &'a [u8],
        family: &'a [u8],
        qualifier: &'a [u8],
        value: &'a [u8],
        timestamp: i64,
        lock_id: i64,
    ) -> Result<Self, ValidationError> {
        if table.is_empty() {
            return Err(ValidationError::EmptyTable);
        }
        check_key(key)?;
        check_family(family)?;
        check_qualifier(qualifier)?;
        check_value(value)?;
        Ok(PutRequest {
            table,
            key,
            family,
            qualifier,
            value,
            timestamp,
            lock_id,
            durable: true,
            bufferable: true,
            region: None,
        })
    }

    /// Build a put from a pre-built cell, holding `lock`.
    pub fn from_cell(
        table: &'a [u8],
        cell: &Cell<'a>,
        lock: RowLock,
    ) -> Result<Self, ValidationError> {
        Self::with_timestamp_and_lock(
            table,
            cell.key(),
            cell.family(),
            cell.qualifier(),
            cell.value(),
            cell.timestamp(),
            lock.id(),
        )
    }

    /// A fresh put with every field a single zero byte and the region
    /// pre-bound. Useful for loops that need a valid-looking edit to start
    /// from. Each call returns a new value; there is no shared instance to
    /// mutate.
    pub fn empty() -> PutRequest<'static> {
        const ZERO: &[u8] = &[0];
        PutRequest {
            table: ZERO,
            key: ZERO,
            family: ZERO,
            qualifier: ZERO,
            value: ZERO,
            timestamp: TIMESTAMP_NOW,
            lock_id: NO_LOCK,
            durable: true,
            bufferable: true,
            region: Some(ZERO),
        }
    }

    /// Set whether the server must sync this edit to its write-ahead log
    /// before acknowledging. Defaults to true; turning it off trades crash
    /// durability for latency.
    pub fn durability(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }

    /// Set whether the client may buffer this edit before sending it.
    /// Defaults to true; purely advisory to the batching layer, never
    /// serialized.
    pub fn buffering(mut self, bufferable: bool) -> Self {
        self.bufferable = bufferable;
        self
    }

    /// Bind the target region that owns this row key.
    ///
    /// The transition is unset → set, exactly once; a second bind is
    /// [`EncodeError::RegionRebound`].
    pub fn bind_region(&mut self, region: &'a [u8]) -> Result<(), EncodeError> {
        if self.region.is_some() {
            return Err(EncodeError::RegionRebound);
        }
        self.region = Some(region);
        Ok(())
    }

    /// The bound target region, if any.
    pub fn region(&self) -> Option<&'a [u8]> {
        self.region
    }

    /// The timestamp, possibly the [`TIMESTAMP_NOW`] sentinel.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The lock id, possibly the [`NO_LOCK`] sentinel.
    pub fn lock_id(&self) -> i64 {
        self.lock_id
    }

    /// Whether the edit must hit the write-ahead log before the ack.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Whether the client may buffer the edit before sending.
    pub fn is_bufferable(&self) -> bool {
        self.bufferable
    }

    /// The cell record this put carries as its payload.
    pub(crate) fn payload_cell(&self) -> Cell<'a> {
        // fields were validated at construction
        Cell::new_unchecked(
            self.key,
            self.family,
            self.qualifier,
            self.value,
            self.timestamp,
        )
    }
}

impl HasTable for PutRequest<'_> {
    fn table(&self) -> &[u8] {
        self.table
    }
}

impl HasKey for PutRequest<'_> {
    fn key(&self) -> &[u8] {
        self.key
    }
}

impl HasFamily for PutRequest<'_> {
    fn family(&self) -> &[u8] {
        self.family
    }
}

impl HasQualifier for PutRequest<'_> {
    fn qualifier(&self) -> &[u8] {
        self.qualifier
    }
}

impl HasValue for PutRequest<'_> {
    fn value(&self) -> &[u8] {
        self.value
    }
}

impl fmt::Display for PutRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PutRequest(table={}, key={}, family={}, qualifier={}, value={}, \
             timestamp={}, lock_id={}, durable={}, bufferable={})",
            pretty(self.table),
            pretty(self.key),
            pretty(self.family),
            pretty(self.qualifier),
            pretty(self.value),
            self.timestamp,
            self.lock_id,
            self.durable,
            self.bufferable,
        )
    }
}
