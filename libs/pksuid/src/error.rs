//! Error types for PKSUID parsing and conversion.

use thiserror::Error;

/// Errors that can occur when decoding or converting a PKSUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PksuidError {
    /// The input is shorter than the smallest valid encoding.
    ///
    /// Binary input needs at least 20 bytes, text input at least 27 characters.
    #[error("pksuid: valid PKSUIDs cannot be less than {min} bytes, got {len}")]
    TooShort { min: usize, len: usize },

    /// Binary input is longer than the 36-byte layout.
    #[error("pksuid: valid PKSUIDs cannot be greater than {max} bytes, got {len}")]
    TooLong { max: usize, len: usize },

    /// The text prefix does not fit in the 16-byte prefix region.
    #[error("pksuid: prefix must be at most 16 bytes, got {len}")]
    PrefixTooLong { len: usize },

    /// The trailing 27 characters are not a valid encoded KSUID.
    #[error("pksuid: failed to parse encoded KSUID: {0}")]
    MalformedId(String),

    /// A boundary scalar of a category other than null, bytes, or text.
    #[error("pksuid: unable to convert scalar of type {category} into PKSUID")]
    UnsupportedScalarType { category: &'static str },

    /// A typed identifier carried a different prefix.
    #[error("pksuid: invalid prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },
}

impl PksuidError {
    /// Returns true if this error is a length-constraint violation.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            PksuidError::TooShort { .. }
                | PksuidError::TooLong { .. }
                | PksuidError::PrefixTooLong { .. }
        )
    }

    /// Returns true if this error indicates a prefix problem.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            PksuidError::PrefixTooLong { .. } | PksuidError::InvalidPrefix { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(PksuidError::TooShort { min: 20, len: 3 }.is_length_error());
        assert!(PksuidError::TooLong { max: 36, len: 40 }.is_length_error());
        assert!(PksuidError::PrefixTooLong { len: 17 }.is_prefix_error());
        assert!(!PksuidError::MalformedId("bad".into()).is_length_error());
        assert!(!PksuidError::UnsupportedScalarType { category: "int" }.is_prefix_error());
    }

    #[test]
    fn test_error_messages() {
        let err = PksuidError::TooShort { min: 27, len: 0 };
        assert!(err.to_string().contains("less than 27"));

        let err = PksuidError::UnsupportedScalarType { category: "bool" };
        assert!(err.to_string().contains("bool"));
    }
}
