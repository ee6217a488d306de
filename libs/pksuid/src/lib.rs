//! # pksuid
//!
//! Prefixed KSUIDs: sortable unique identifiers carrying a short
//! human-readable label.
//!
//! ## Format
//!
//! A PKSUID is a 16-byte prefix followed by a 20-byte KSUID (36 bytes total).
//! Its string form is the prefix, up to its first NUL byte, followed directly
//! by the 27-character base62 KSUID. No separator is reserved; by convention
//! the prefix ends with one:
//!
//! - `key_sandbox:208baxy3JWtg6ZyJmGpo2RoEpTX`
//! - `user_208bayYfCoFfqyLD4lZaZ8BvwaF`
//!
//! This format provides:
//! - Sortability (KSUID leads with a timestamp)
//! - Uniqueness (128 bits of random payload)
//! - Human readability (prefix names the resource)
//!
//! ## Storage boundary
//!
//! [`Pksuid::to_scalar`] and [`Pksuid::from_scalar`] convert to and from a
//! nullable [`Scalar`]. Byte scalars may hold either the text or the binary
//! form; see [`classify_bytes`] for how they are told apart.

mod base62;
mod error;
mod macros;
mod prefix;
mod scalar;
mod types;

pub use base62::is_base62;
pub use error::PksuidError;
pub use prefix::Prefix;
pub use scalar::{classify_bytes, Encoding, Scalar};
pub use types::Pksuid;

/// Re-export ksuid for consumers that need raw KSUID operations
pub use svix_ksuid::Ksuid;

/// Length of the prefix region in bytes.
pub const PREFIX_LEN: usize = 16;

/// Length of a binary KSUID in bytes.
pub const ID_LEN: usize = 20;

/// Length of a base62-encoded KSUID in characters.
pub const ID_ENCODED_LEN: usize = 27;

/// Length of a binary PKSUID in bytes.
pub const PKSUID_LEN: usize = PREFIX_LEN + ID_LEN;
