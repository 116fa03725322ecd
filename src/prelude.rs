//! Convenient imports for the Cellstore client.
//!
//! Re-exports the types most callers need with a single import:
//!
//! ```
//! use cellstore_client::prelude::*;
//!
//! let put = PutRequest::new(b"t", b"r", b"cf", b"q", b"v")?;
//! # let _ = put;
//! # Ok::<(), cellstore_client::ValidationError>(())
//! ```

// Request construction and encoding
pub use cellstore_wire::{predict_size, put_version, serialize, PutRequest, RowLock, NO_LOCK};

// Error handling
pub use cellstore_core::ValidationError;
pub use cellstore_wire::EncodeError;

// Cell codec and sentinels
pub use cellstore_core::{Cell, TIMESTAMP_NOW};

// Capability traits for generic field access
pub use cellstore_core::contract::{HasFamily, HasKey, HasQualifier, HasTable, HasValue};
