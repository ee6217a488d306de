//! The fixed-size prefix label.

use std::fmt;

use crate::{PksuidError, PREFIX_LEN};

/// A 16-byte prefix buffer.
///
/// The printable value ends at the first NUL byte; anything after it is kept
/// in storage but never rendered. Equality compares the whole buffer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Prefix([u8; PREFIX_LEN]);

impl Prefix {
    /// The all-zero prefix.
    pub const NIL: Self = Self([0; PREFIX_LEN]);

    /// Wraps a raw buffer as-is, including any bytes after a NUL.
    #[must_use]
    pub const fn from_raw(bytes: [u8; PREFIX_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a zero-padded prefix from a string known at compile time.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const context) if `s` exceeds 16 bytes.
    #[must_use]
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() <= PREFIX_LEN, "prefix exceeds 16 bytes");

        let mut buf = [0u8; PREFIX_LEN];
        let mut i = 0;
        while i < bytes.len() {
            buf[i] = bytes[i];
            i += 1;
        }
        Self(buf)
    }

    /// Returns the full 16-byte buffer.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }

    /// Returns the printable part: everything before the first NUL byte.
    #[must_use]
    pub fn printable(&self) -> &[u8] {
        trim_after_nul(&self.0)
    }

    /// Returns true if every byte of the buffer is zero.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; PREFIX_LEN]
    }
}

impl TryFrom<&[u8]> for Prefix {
    type Error = PksuidError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() > PREFIX_LEN {
            return Err(PksuidError::PrefixTooLong { len: value.len() });
        }
        let mut buf = [0u8; PREFIX_LEN];
        buf[..value.len()].copy_from_slice(value);
        Ok(Self(buf))
    }
}

impl TryFrom<&str> for Prefix {
    type Error = PksuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.as_bytes())
    }
}

impl From<[u8; PREFIX_LEN]> for Prefix {
    fn from(bytes: [u8; PREFIX_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Prefix {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.printable()))
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Prefix").field(&self.to_string()).finish()
    }
}

/// Cuts `b` at the first NUL byte, dropping the NUL and everything after it.
pub(crate) fn trim_after_nul(b: &[u8]) -> &[u8] {
    match b.iter().position(|&c| c == 0) {
        Some(i) => &b[..i],
        None => b,
    }
}
