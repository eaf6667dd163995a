//! Wire conversion errors.

use thiserror::Error;

/// Errors raised while converting between wire messages and resource models.
///
/// Transport failures are not represented here; they surface as
/// `tonic::Status` from the client layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The wire carried an enum integer outside the declared value set.
    #[error("unrecognized {field} wire value {value}")]
    UnknownEnum {
        /// Fully qualified type and field path of the enum.
        field: &'static str,
        /// The rejected wire integer.
        value: i32,
    },

    /// An `Any` payload declared a different type than the caller expected.
    #[error("payload type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// The type the caller asked to unpack.
        expected: &'static str,
        /// The type the payload declared.
        actual: String,
    },

    /// An `Any` payload declared a type no decoder is registered for.
    #[error("no decoder registered for payload type {0:?}")]
    UnknownType(String),

    /// The payload bytes did not decode as the declared message type.
    #[error("failed to decode payload: {0}")]
    Decode(#[from] prost::DecodeError),
}
