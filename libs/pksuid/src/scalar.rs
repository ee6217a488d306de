//! Conversion to and from storage boundary values.
//!
//! Storage layers hand back untyped values: a column holding a PKSUID may come
//! back as NULL, as text, or as raw bytes that are either the canonical text
//! or the 20-36 byte binary form. [`Pksuid::from_scalar`] decides which.

use time::OffsetDateTime;
use tracing::{debug, trace};

use crate::base62::is_base62;
use crate::{Pksuid, PksuidError, ID_ENCODED_LEN, PKSUID_LEN};

/// A nullable value exchanged with a storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// SQL NULL.
    Null,
    /// A binary column value.
    Bytes(Vec<u8>),
    /// A text column value.
    Text(String),
    /// An integer column value.
    Int(i64),
    /// A floating-point column value.
    Float(f64),
    /// A boolean column value.
    Bool(bool),
    /// A timestamp column value.
    Timestamp(OffsetDateTime),
}

impl Scalar {
    /// Returns the name of this value's category.
    pub fn category(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bytes(_) => "bytes",
            Scalar::Text(_) => "text",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "bool",
            Scalar::Timestamp(_) => "timestamp",
        }
    }

    /// Returns true for [`Scalar::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

/// How a byte scalar is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Canonical `{prefix}{27-char KSUID}` text.
    Text,
    /// The 20-36 byte binary layout.
    Binary,
}

/// Decides whether `v` holds the text or the binary form.
///
/// Anything over 36 bytes can only be text. Otherwise the value is text when
/// its last 27 bytes are all base62. This is a heuristic: a binary value
/// whose prefix and KSUID bytes happen to all be base62 symbols is read as
/// text.
pub fn classify_bytes(v: &[u8]) -> Encoding {
    if v.len() > PKSUID_LEN {
        return Encoding::Text;
    }
    if v.len() >= ID_ENCODED_LEN && is_base62(&v[v.len() - ID_ENCODED_LEN..]) {
        return Encoding::Text;
    }
    Encoding::Binary
}

impl Pksuid {
    /// Converts to a boundary value.
    ///
    /// Nil identifiers (zero KSUID, any prefix) become [`Scalar::Null`].
    /// Everything else becomes the canonical text, or its raw bytes when the
    /// prefix is not valid UTF-8.
    pub fn to_scalar(&self) -> Scalar {
        if self.is_nil() {
            return Scalar::Null;
        }
        match String::from_utf8(self.to_text()) {
            Ok(s) => Scalar::Text(s),
            Err(e) => Scalar::Bytes(e.into_bytes()),
        }
    }

    /// Converts from a boundary value.
    ///
    /// [`Scalar::Null`] yields [`Pksuid::NIL`], so a nil identifier with a
    /// prefix does not survive a round trip.
    pub fn from_scalar(value: &Scalar) -> Result<Self, PksuidError> {
        match value {
            Scalar::Null => {
                trace!("null scalar decoded as nil PKSUID");
                Ok(Self::NIL)
            }
            Scalar::Bytes(v) => {
                let encoding = classify_bytes(v);
                trace!(len = v.len(), ?encoding, "classified byte scalar");
                match encoding {
                    Encoding::Text => Self::parse_text(v),
                    Encoding::Binary => Self::from_bytes(v),
                }
            }
            Scalar::Text(s) => Self::parse(s),
            other => {
                debug!(category = other.category(), "unsupported scalar type");
                Err(PksuidError::UnsupportedScalarType {
                    category: other.category(),
                })
            }
        }
    }
}

impl From<Pksuid> for Scalar {
    fn from(id: Pksuid) -> Self {
        id.to_scalar()
    }
}

impl From<Option<Pksuid>> for Scalar {
    fn from(id: Option<Pksuid>) -> Self {
        id.map_or(Scalar::Null, |id| id.to_scalar())
    }
}

impl TryFrom<&Scalar> for Pksuid {
    type Error = PksuidError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        Self::from_scalar(value)
    }
}

impl TryFrom<Scalar> for Pksuid {
    type Error = PksuidError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::from_scalar(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Prefix, ID_LEN, PREFIX_LEN};

    const ENCODED_WITH_PREFIX: &str = "key_sandbox:208baxy3JWtg6ZyJmGpo2RoEpTX";

    #[test]
    fn test_to_scalar_text() {
        let id = Pksuid::parse(ENCODED_WITH_PREFIX).unwrap();
        assert_eq!(id.to_scalar(), Scalar::Text(ENCODED_WITH_PREFIX.to_string()));
    }

    #[test]
    fn test_to_scalar_nil_is_null() {
        assert_eq!(Pksuid::NIL.to_scalar(), Scalar::Null);

        let mut prefixed_nil = Pksuid::NIL;
        prefixed_nil.set_prefix(Prefix::from_static("prefix:"));
        assert_eq!(prefixed_nil.to_scalar(), Scalar::Null);
        assert_eq!(Scalar::from(None::<Pksuid>), Scalar::Null);
    }

    #[test]
    fn test_from_scalar() {
        let prefix = Prefix::from_static("baz");
        let id1 = Pksuid::new(prefix);
        let id2 = Pksuid::new(prefix);
        let mut short_binary = b"baz".to_vec();
        short_binary.extend_from_slice(id2.id_bytes());

        let cases = [
            (Pksuid::NIL, Scalar::Null),
            (id1, Scalar::Text(id1.to_string())),
            (id1, Scalar::Bytes(id1.to_string().into_bytes())),
            (id2, Scalar::Bytes(id2.as_bytes().to_vec())),
            (id2, Scalar::Bytes(short_binary)),
        ];

        for (expected, value) in cases {
            let decoded = Pksuid::from_scalar(&value).unwrap();
            assert_eq!(decoded, expected, "scalar of category {}", value.category());
        }
    }

    #[test]
    fn test_from_scalar_bare_binary_ksuid() {
        let id = Pksuid::new(Prefix::NIL);
        let decoded = Pksuid::from_scalar(&Scalar::Bytes(id.id_bytes().to_vec())).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn test_from_scalar_long_bytes_are_text() {
        let text = format!("0123456789abcdef{}", "208baxy3JWtg6ZyJmGpo2RoEpTX");
        assert_eq!(classify_bytes(text.as_bytes()), Encoding::Text);

        let decoded = Pksuid::from_scalar(&Scalar::Bytes(text.clone().into_bytes())).unwrap();
        assert_eq!(decoded.to_string(), text);

        let too_long = format!("x{text}");
        let err = Pksuid::from_scalar(&Scalar::Bytes(too_long.into_bytes())).unwrap_err();
        assert_eq!(err, PksuidError::PrefixTooLong { len: 17 });
    }

    #[test]
    fn test_from_scalar_rejects_out_of_range_ksuid() {
        for tail in ["aWgEPTl1tmebfsQzFP4bxwgy80W", "zzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            let text = format!("key_live:{tail}");
            assert_eq!(classify_bytes(text.as_bytes()), Encoding::Text);

            let values = [
                Scalar::Bytes(tail.as_bytes().to_vec()),
                Scalar::Bytes(text.clone().into_bytes()),
                Scalar::Text(text),
            ];
            for value in values {
                let err = Pksuid::from_scalar(&value).unwrap_err();
                assert!(
                    matches!(err, PksuidError::MalformedId(_)),
                    "{value:?} decoded with {err:?}"
                );
            }
        }
    }

    #[test]
    fn test_from_scalar_unsupported() {
        for value in [Scalar::Int(7), Scalar::Float(1.5), Scalar::Bool(true)] {
            let err = Pksuid::from_scalar(&value).unwrap_err();
            assert_eq!(
                err,
                PksuidError::UnsupportedScalarType {
                    category: value.category()
                }
            );
        }
    }

    #[test]
    fn test_from_scalar_short_bytes() {
        let err = Pksuid::from_scalar(&Scalar::Bytes(vec![1; ID_LEN - 1])).unwrap_err();
        assert!(matches!(err, PksuidError::TooShort { min: 20, .. }));
    }

    #[test]
    fn test_null_roundtrip_loses_prefix() {
        let mut prefixed_nil = Pksuid::NIL;
        prefixed_nil.set_prefix(Prefix::from_static("prefix:"));
        assert!(prefixed_nil.is_nil());
        assert!(!prefixed_nil.is_fully_nil());

        let back = Pksuid::from_scalar(&prefixed_nil.to_scalar()).unwrap();
        assert!(back.is_fully_nil());
        assert_ne!(back, prefixed_nil);
    }

    #[test]
    fn test_non_utf8_prefix_roundtrips_through_bytes() {
        let mut raw = [0u8; PREFIX_LEN];
        raw[..2].copy_from_slice(&[0xc3, 0x28]);
        let id = Pksuid::new(Prefix::from_raw(raw));

        let scalar = id.to_scalar();
        assert!(matches!(scalar, Scalar::Bytes(_)));
        assert_eq!(Pksuid::try_from(scalar).unwrap(), id);
    }

    #[test]
    fn test_classification_heuristic_can_misread_binary() {
        // A binary value made entirely of base62 bytes looks like text.
        let binary = [b'A'; PKSUID_LEN];
        let as_binary = Pksuid::from_bytes(&binary).unwrap();

        assert_eq!(classify_bytes(&binary), Encoding::Text);
        let decoded = Pksuid::from_scalar(&Scalar::Bytes(binary.to_vec())).unwrap();
        assert_ne!(decoded, as_binary);
        assert_eq!(decoded.prefix().to_string(), "A".repeat(PKSUID_LEN - ID_ENCODED_LEN));
        assert_eq!(decoded.to_string(), "A".repeat(PKSUID_LEN));
    }

    #[test]
    fn test_classification_of_generated_binary() {
        // Zero padding after a short prefix is never base62.
        let id = Pksuid::new(Prefix::from_static("baz"));
        assert_eq!(classify_bytes(id.as_bytes()), Encoding::Binary);
        assert_eq!(classify_bytes(id.id_bytes()), Encoding::Binary);
    }
}
