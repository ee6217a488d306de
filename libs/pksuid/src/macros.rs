//! Macros for defining typed PKSUIDs.

/// Macro to define a PKSUID newtype bound to one prefix.
///
/// This generates a wrapper around [`Pksuid`](crate::Pksuid) with:
/// - A `PREFIX` constant
/// - `new()` to generate a fresh ID
/// - `parse()` that rejects any other prefix
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - Conversion to and from [`Scalar`](crate::Scalar)
///
/// # Example
///
/// ```ignore
/// define_pksuid!(ApiKeyId, "key_live:");
///
/// let key = ApiKeyId::new();
/// let parsed: ApiKeyId = "key_live:208baxy3JWtg6ZyJmGpo2RoEpTX".parse()?;
/// ```
#[macro_export]
macro_rules! define_pksuid {
    ($name:ident, $prefix:literal) => {
        /// A PKSUID that always carries this type's prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Pksuid);

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            const PREFIX_BYTES: $crate::Prefix = $crate::Prefix::from_static($prefix);

            /// Creates a new ID with a fresh KSUID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Pksuid::new(Self::PREFIX_BYTES))
            }

            /// Wraps a PKSUID after checking its prefix.
            pub fn from_pksuid(id: $crate::Pksuid) -> Result<Self, $crate::PksuidError> {
                if id.prefix() != Self::PREFIX_BYTES {
                    return Err($crate::PksuidError::InvalidPrefix {
                        expected: Self::PREFIX,
                        actual: id.prefix().to_string(),
                    });
                }
                Ok(Self(id))
            }

            /// Returns the underlying PKSUID.
            #[must_use]
            pub const fn pksuid(&self) -> $crate::Pksuid {
                self.0
            }

            /// Parses an ID from its canonical string.
            pub fn parse(s: &str) -> Result<Self, $crate::PksuidError> {
                Self::from_pksuid($crate::Pksuid::parse(s)?)
            }

            /// Converts from a storage boundary value.
            pub fn from_scalar(value: &$crate::Scalar) -> Result<Self, $crate::PksuidError> {
                Self::from_pksuid($crate::Pksuid::from_scalar(value)?)
            }

            /// Converts to a storage boundary value.
            #[must_use]
            pub fn to_scalar(&self) -> $crate::Scalar {
                self.0.to_scalar()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::PksuidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let id = <$crate::Pksuid as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_pksuid(id).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::Pksuid> for $name {
            fn as_ref(&self) -> &$crate::Pksuid {
                &self.0
            }
        }

        impl From<$name> for $crate::Pksuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}
