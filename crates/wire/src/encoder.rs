//! Size prediction and byte-exact serialization
//!
//! [`predict_size`] sums, field by field, the exact bytes [`serialize`]
//! will produce, so the output buffer can be allocated once and never
//! resized. The two must stay in lockstep: any write past the predicted
//! bound is a bug in this file and surfaces as a fatal
//! [`EncodeError::PredictionExceeded`].
//!
//! Two length-prefix conventions coexist on the wire: the region name takes
//! the variable-width vint encoding, while the row key takes a fixed 3-byte
//! prefix and the family a 1-byte prefix. The server decodes each field with
//! its own convention, so neither can stand in for the other.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};
use tracing::{error, trace};

use cellstore_core::bytes::{vint_len, write_vint};
use cellstore_core::contract::{HasFamily, HasKey};

use crate::buffer::FixedBuffer;
use crate::error::EncodeError;
use crate::put::{PutRequest, PUT_CODE};
use crate::version::put_version;

/// Inner mutation format tag, pinned to 1.
///
/// The negotiated header version ([`put_version`](crate::put_version)) can
/// be 2, but the inner tag does not follow it. Unifying the two would
/// change bytes the server has always accepted; do not touch this without
/// confirming server-side decoding for every supported capability.
pub const PUT_FORMAT_VERSION: u8 = 1;

/// Predict the serialized size of `put`, in bytes.
///
/// Exact accounting of every write [`serialize`] performs, making the
/// result both a safe upper bound and the final buffer length. Call it once
/// per request; it is a pure function of the field lengths, so the result
/// never changes for a given request. Requires the target region to be
/// bound, since the region name is part of the accounting.
pub fn predict_size(put: &PutRequest<'_>) -> Result<usize, EncodeError> {
    let region = put.region().ok_or(EncodeError::RegionUnbound)?;

    let mut size = 0;
    size += 4; // parameter count
    size += vint_len(region.len() as u32); // region name length prefix
    size += region.len(); // region name
    size += 1; // put type tag
    size += 1; // put type tag, repeated
    size += 1; // inner format version
    size += 3; // row key length prefix
    size += put.key().len(); // row key
    size += 8; // timestamp
    size += 8; // lock id
    size += 1; // durability flag
    size += 4; // family count
    size += 1; // family length prefix
    size += put.family().len(); // family
    size += 4; // cell count
    size += 4; // total cell-payload bytes
    size += put.payload_cell().predicted_size(); // cell payload

    Ok(size)
}

/// Serialize `put` for a server reporting `server_capability`.
///
/// Allocates a buffer of exactly [`predict_size`] bytes and writes the full
/// record into it. The header version negotiated from `server_capability`
/// frames the call at the connection layer; the mutation bytes themselves
/// are identical for every capability because the inner format tag is
/// pinned (see [`PUT_FORMAT_VERSION`]).
///
/// # Errors
///
/// [`EncodeError::RegionUnbound`] if no target region has been bound, and
/// [`EncodeError::PredictionExceeded`] if a write would pass the predicted
/// bound — a fatal accounting bug; discard the buffer and abort the
/// in-flight request.
pub fn serialize(put: &PutRequest<'_>, server_capability: u8) -> Result<Vec<u8>, EncodeError> {
    let region = put.region().ok_or(EncodeError::RegionUnbound)?;
    let predicted = predict_size(put)?;
    trace!(
        "encoding put: {} predicted bytes, header version {}",
        predicted,
        put_version(server_capability)
    );

    let mut buf = FixedBuffer::with_capacity(predicted);
    match write_put(&mut buf, put, region) {
        Ok(()) => Ok(buf.into_vec()),
        Err(_) => {
            let required = buf.fault().unwrap_or(buf.written());
            error!(
                "size prediction exceeded while encoding put: predicted {}, required {}",
                predicted, required
            );
            Err(EncodeError::PredictionExceeded {
                predicted,
                required,
            })
        }
    }
}

fn write_put(buf: &mut FixedBuffer, put: &PutRequest<'_>, region: &[u8]) -> io::Result<()> {
    let cell = put.payload_cell();

    buf.write_u32::<BigEndian>(2)?; // parameter count

    // 1st parameter: the region name
    write_vint(buf, region.len() as u32)?;
    buf.write_all(region)?;

    // 2nd parameter: the put itself
    buf.write_u8(PUT_CODE)?;
    buf.write_u8(PUT_CODE)?; // peers expect the tag twice
    buf.write_u8(PUT_FORMAT_VERSION)?;
    buf.write_u24::<BigEndian>(put.key().len() as u32)?;
    buf.write_all(put.key())?;
    buf.write_i64::<BigEndian>(put.timestamp())?;
    buf.write_i64::<BigEndian>(put.lock_id())?;
    buf.write_u8(put.is_durable() as u8)?;

    buf.write_u32::<BigEndian>(1)?; // family count
    buf.write_u8(put.family().len() as u8)?;
    buf.write_all(put.family())?;

    buf.write_u32::<BigEndian>(1)?; // cell count
    buf.write_u32::<BigEndian>(cell.predicted_size() as u32)?;
    cell.write_to(buf)
}
