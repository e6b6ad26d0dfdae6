//! Error types for object codec operations.
//!
//! Decode-time errors are fatal for the message being decoded: a stream
//! exhausted mid-field or a code outside a registry's range means the two
//! ends disagree about the protocol version, and guessing would silently
//! misalign every subsequent field. Encode-time errors only occur when a
//! state value violates its category's shape contract, and are raised
//! before the offending field writes any bits.

use std::fmt;

use bitstream::BitError;
use defs::{ObstacleRole, RegistryError, RotationMode};

/// Result type for object codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while serializing or deserializing object state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Bitstream failure (exhausted stream, out-of-range field value).
    Bitstream(BitError),

    /// Definition registry failure (unknown id, code out of range).
    Registry(RegistryError),

    /// Decoded ordinal outside the enumeration's member range.
    InvalidEnumValue {
        /// Name of the enumeration being decoded.
        enumeration: &'static str,
        /// The out-of-range ordinal.
        value: u64,
    },

    /// Rotation state variant disagrees with the definition's declared mode.
    RotationModeMismatch {
        /// Mode declared by the definition.
        expected: RotationMode,
        /// Mode implied by the state value.
        found: RotationMode,
    },

    /// Role sub-state variant disagrees with the definition's declared role.
    RoleMismatch {
        /// Role declared by the definition.
        expected: ObstacleRole,
    },

    /// The definition declares variations but the state carries none.
    MissingVariation {
        /// Id string of the definition.
        id_string: String,
    },

    /// The state carries a variation the definition does not declare.
    UnexpectedVariation {
        /// Id string of the definition.
        id_string: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstream(err) => write!(f, "bitstream error: {err}"),
            Self::Registry(err) => write!(f, "registry error: {err}"),
            Self::InvalidEnumValue { enumeration, value } => {
                write!(f, "ordinal {value} is not a member of {enumeration}")
            }
            Self::RotationModeMismatch { expected, found } => {
                write!(
                    f,
                    "rotation state is {found:?} but the definition declares {expected:?}"
                )
            }
            Self::RoleMismatch { expected } => {
                write!(
                    f,
                    "role state does not match the definition's declared role {expected:?}"
                )
            }
            Self::MissingVariation { id_string } => {
                write!(f, "{id_string:?} declares variations but none was provided")
            }
            Self::UnexpectedVariation { id_string } => {
                write!(f, "{id_string:?} does not declare variations")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(err) => Some(err),
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitError> for CodecError {
    fn from(err: BitError) -> Self {
        Self::Bitstream(err)
    }
}

impl From<RegistryError> for CodecError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}
