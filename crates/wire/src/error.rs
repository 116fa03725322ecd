//! Encoding-time errors
//!
//! [`EncodeError::RegionUnbound`] and [`EncodeError::RegionRebound`] are
//! dispatch-discipline errors: the caller resolved regions in the wrong
//! order. [`EncodeError::PredictionExceeded`] is different in kind — it
//! means the size accounting itself is wrong, which is a bug in this crate.
//! It is never retried; the in-flight buffer must be discarded rather than
//! transmitted truncated.

use thiserror::Error;

/// An error raised while encoding a request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// No target region has been bound; resolve the row's region first.
    #[error("no target region bound; resolve the row's region before encoding")]
    RegionUnbound,

    /// A target region was already bound; a request routes to exactly one
    /// region, exactly once.
    #[error("target region already bound; a request routes to exactly one region")]
    RegionRebound,

    /// Serialization needed more bytes than the size prediction allowed.
    ///
    /// Fatal: this indicates a bug in the size-accounting logic. The buffer
    /// holds a truncated record and must not be transmitted.
    #[error("size prediction exceeded: predicted {predicted} bytes, write needed {required}")]
    PredictionExceeded {
        /// Bytes the prediction allocated.
        predicted: usize,
        /// Bytes the failing write would have required.
        required: usize,
    },
}
