//! Capability traits for RPC field access
//!
//! Each request type exposes the byte fields it carries through small,
//! independent traits rather than one wide interface. A batching layer can
//! ask for `HasKey + HasFamily` without caring which concrete mutation it is
//! holding, and a request implements exactly the traits for the fields it
//! actually has.

/// The request names a table.
pub trait HasTable {
    /// The table this request edits.
    fn table(&self) -> &[u8];
}

/// The request names a row.
pub trait HasKey {
    /// The row key this request edits.
    fn key(&self) -> &[u8];
}

/// The request names a column family.
pub trait HasFamily {
    /// The column family this request edits.
    fn family(&self) -> &[u8];
}

/// The request names a column qualifier.
pub trait HasQualifier {
    /// The column qualifier this request edits. May be empty.
    fn qualifier(&self) -> &[u8];
}

/// The request carries a value.
pub trait HasValue {
    /// The value this request stores. May be empty.
    fn value(&self) -> &[u8];
}
