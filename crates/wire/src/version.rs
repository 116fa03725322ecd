//! Protocol version selection
//!
//! The client negotiates a header version per connection from the capability
//! marker the server reports at handshake. Note that this selects the
//! *header* version only; the inner mutation format tag is pinned
//! independently (see the encoder).

/// Capability marker at which the server started appending attribute
/// metadata to mutation RPCs. Servers at or above it speak header version 2.
pub const CAPABILITY_ATTRIBUTES: u8 = 29;

/// Header version for a put against a server with the given capability.
///
/// Pure and total: returns 2 iff `server_capability` is at least
/// [`CAPABILITY_ATTRIBUTES`], else 1.
pub fn put_version(server_capability: u8) -> u8 {
    if server_capability >= CAPABILITY_ATTRIBUTES {
        2
    } else {
        1
    }
}
