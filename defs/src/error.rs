//! Registry construction and lookup errors.
//!
//! All of these are programmer/protocol errors: registries are built once at
//! process start and a broken registry makes the protocol version unusable,
//! so none of them are recoverable.

use std::fmt;

use bitstream::BitError;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur when building or consulting a definition registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two definitions share the same id string.
    DuplicateIdentifier {
        /// The repeated id string.
        id_string: String,
    },

    /// A registry was built from an empty definition list.
    EmptyRegistry,

    /// Lookup by an id string not present in the registry.
    UnknownIdentifier {
        /// The unresolved id string.
        id_string: String,
    },

    /// A wire code at or above the registry's entry count.
    CodeOutOfRange {
        /// The out-of-range code.
        code: u64,
        /// Number of registered definitions.
        count: usize,
    },

    /// A registry's entry count drifted from its committed baseline.
    BaselineMismatch {
        /// Name of the registry that drifted.
        registry: &'static str,
        /// The committed baseline count.
        expected: usize,
        /// The actual entry count.
        actual: usize,
    },

    /// Underlying bitstream failure while writing/reading a code.
    Bitstream(BitError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIdentifier { id_string } => {
                write!(f, "duplicate definition id string {id_string:?}")
            }
            Self::EmptyRegistry => {
                write!(f, "registry built from an empty definition list")
            }
            Self::UnknownIdentifier { id_string } => {
                write!(f, "unknown definition id string {id_string:?}")
            }
            Self::CodeOutOfRange { code, count } => {
                write!(
                    f,
                    "definition code {code} out of range for registry of {count} entries"
                )
            }
            Self::BaselineMismatch {
                registry,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{registry} registry has {actual} entries, committed baseline is {expected}"
                )
            }
            Self::Bitstream(err) => write!(f, "bitstream error: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitError> for RegistryError {
    fn from(err: BitError) -> Self {
        Self::Bitstream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_identifiers() {
        let err = RegistryError::DuplicateIdentifier {
            id_string: "basic_vest".into(),
        };
        assert!(err.to_string().contains("basic_vest"));

        let err = RegistryError::UnknownIdentifier {
            id_string: "no_such_item".into(),
        };
        assert!(err.to_string().contains("no_such_item"));
    }

    #[test]
    fn display_code_out_of_range() {
        let err = RegistryError::CodeOutOfRange { code: 9, count: 6 };
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('6'));
    }

    #[test]
    fn bitstream_errors_convert_and_chain() {
        let err: RegistryError = BitError::UnexpectedEof {
            requested: 3,
            available: 0,
        }
        .into();
        assert!(matches!(err, RegistryError::Bitstream(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
