//! The PKSUID value type.
//!
//! A PKSUID is 36 bytes:
//!
//! ```text
//!  00-15  prefix (zero-padded, NUL ends the printable value)
//!  16-19  big-endian u32 timestamp, KSUID epoch
//!  20-35  random payload
//! ```

use std::fmt;
use std::str::FromStr;

use svix_ksuid::{Ksuid, KsuidLike};
use time::OffsetDateTime;

use crate::prefix::trim_after_nul;
use crate::{PksuidError, Prefix, ID_ENCODED_LEN, ID_LEN, PKSUID_LEN, PREFIX_LEN};

/// The largest 27-character encoding that fits in 20 bytes.
const MAX_ENCODED_ID: &[u8; ID_ENCODED_LEN] = b"aWgEPTl1tmebfsQzFP4bxwgy80V";

const TIMESTAMP_LEN: usize = 4;

/// A prefixed KSUID.
///
/// Ordering follows the raw bytes, so identifiers sharing a prefix sort by
/// creation time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pksuid([u8; PKSUID_LEN]);

impl Pksuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self([0; PKSUID_LEN]);

    /// Generates a new identifier with a fresh KSUID.
    #[must_use]
    pub fn new(prefix: Prefix) -> Self {
        let mut id = Self::NIL;
        id.set_prefix(prefix);
        let uid = Ksuid::new(None, None);
        id.0[PREFIX_LEN..].copy_from_slice(uid.bytes());
        id
    }

    /// Wraps a raw 36-byte value without inspection.
    #[must_use]
    pub const fn from_raw(bytes: [u8; PKSUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses the canonical string form `{prefix}{27-char KSUID}`.
    pub fn parse(s: &str) -> Result<Self, PksuidError> {
        Self::parse_text(s.as_bytes())
    }

    /// Parses the canonical form given as raw bytes.
    ///
    /// The last 27 bytes are the encoded KSUID; whatever precedes them, up to
    /// 16 bytes of any value, becomes the prefix.
    pub fn parse_text(b: &[u8]) -> Result<Self, PksuidError> {
        if b.len() < ID_ENCODED_LEN {
            return Err(PksuidError::TooShort {
                min: ID_ENCODED_LEN,
                len: b.len(),
            });
        }

        let (head, tail) = b.split_at(b.len() - ID_ENCODED_LEN);

        // The base62 alphabet is in ASCII order, so bytewise order is numeric order.
        if tail > &MAX_ENCODED_ID[..] {
            return Err(PksuidError::MalformedId(format!(
                "'{}' exceeds the largest KSUID",
                String::from_utf8_lossy(tail)
            )));
        }

        let tail =
            std::str::from_utf8(tail).map_err(|e| PksuidError::MalformedId(e.to_string()))?;
        let uid = tail
            .parse::<Ksuid>()
            .map_err(|e| PksuidError::MalformedId(e.to_string()))?;

        if head.len() > PREFIX_LEN {
            return Err(PksuidError::PrefixTooLong { len: head.len() });
        }

        let mut id = Self::NIL;
        id.0[..head.len()].copy_from_slice(head);
        id.0[PREFIX_LEN..].copy_from_slice(uid.bytes());
        Ok(id)
    }

    /// Builds an identifier from its binary form.
    ///
    /// The last 20 bytes are the KSUID; up to 16 leading bytes become the
    /// prefix. Exactly 20 bytes yields an empty prefix.
    pub fn from_bytes(b: &[u8]) -> Result<Self, PksuidError> {
        if b.len() < ID_LEN {
            return Err(PksuidError::TooShort {
                min: ID_LEN,
                len: b.len(),
            });
        }
        if b.len() > PKSUID_LEN {
            return Err(PksuidError::TooLong {
                max: PKSUID_LEN,
                len: b.len(),
            });
        }

        let (head, tail) = b.split_at(b.len() - ID_LEN);
        let mut id = Self::NIL;
        id.0[..head.len()].copy_from_slice(head);
        id.0[PREFIX_LEN..].copy_from_slice(tail);
        Ok(id)
    }

    /// Overwrites the whole prefix region.
    pub fn set_prefix(&mut self, prefix: Prefix) {
        self.0[..PREFIX_LEN].copy_from_slice(prefix.as_bytes());
    }

    /// Returns true if the KSUID part is all zero. The prefix is ignored.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.id_bytes().iter().all(|&b| b == 0)
    }

    /// Returns true if both the prefix and the KSUID part are all zero.
    #[must_use]
    pub fn is_fully_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns the canonical form as bytes.
    ///
    /// Unlike [`Display`](fmt::Display), this keeps prefix bytes that are not
    /// valid UTF-8 exactly as stored.
    #[must_use]
    pub fn to_text(&self) -> Vec<u8> {
        let printable = trim_after_nul(self.prefix_bytes());
        let mut out = Vec::with_capacity(printable.len() + ID_ENCODED_LEN);
        out.extend_from_slice(printable);
        out.extend_from_slice(self.id_string().as_bytes());
        out
    }

    /// Returns the raw 36-byte value.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PKSUID_LEN] {
        &self.0
    }

    /// Returns the KSUID creation time.
    #[must_use]
    pub fn timestamp(&self) -> OffsetDateTime {
        self.ksuid().timestamp()
    }

    /// Returns the timestamp as stored, uncorrected for the KSUID epoch.
    #[must_use]
    pub fn raw_timestamp(&self) -> u32 {
        let mut ts = [0u8; TIMESTAMP_LEN];
        ts.copy_from_slice(&self.0[PREFIX_LEN..PREFIX_LEN + TIMESTAMP_LEN]);
        u32::from_be_bytes(ts)
    }

    /// Returns a copy of the 16-byte random payload.
    #[must_use]
    pub fn payload(&self) -> Vec<u8> {
        self.ksuid().payload().to_vec()
    }

    /// Returns a copy of the prefix region.
    #[must_use]
    pub fn prefix(&self) -> Prefix {
        let mut buf = [0u8; PREFIX_LEN];
        buf.copy_from_slice(self.prefix_bytes());
        Prefix::from_raw(buf)
    }

    /// Returns the raw prefix region.
    #[must_use]
    pub fn prefix_bytes(&self) -> &[u8] {
        &self.0[..PREFIX_LEN]
    }

    /// Returns the 27-character encoded KSUID without the prefix.
    #[must_use]
    pub fn id_string(&self) -> String {
        self.ksuid().to_string()
    }

    /// Returns the raw 20-byte KSUID.
    #[must_use]
    pub fn id_bytes(&self) -> &[u8] {
        &self.0[PREFIX_LEN..]
    }

    /// Returns the KSUID part as a [`Ksuid`].
    #[must_use]
    pub fn ksuid(&self) -> Ksuid {
        let mut buf = [0u8; ID_LEN];
        buf.copy_from_slice(self.id_bytes());
        Ksuid::from_bytes(buf)
    }
}

impl Default for Pksuid {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Pksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(trim_after_nul(self.prefix_bytes())))?;
        f.write_str(&self.id_string())
    }
}

impl fmt::Debug for Pksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pksuid").field(&self.to_string()).finish()
    }
}

impl FromStr for Pksuid {
    type Err = PksuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Pksuid {
    type Error = PksuidError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<[u8; PKSUID_LEN]> for Pksuid {
    fn from(bytes: [u8; PKSUID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Pksuid> for [u8; PKSUID_LEN] {
    fn from(id: Pksuid) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for Pksuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for Pksuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Pksuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
