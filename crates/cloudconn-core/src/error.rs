//! Core model errors.

use thiserror::Error;

/// Errors raised while building resource models from external input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A symbolic enum name is not part of the field's declared value set.
    #[error("unknown {field} value: {value:?}")]
    UnknownEnum {
        /// Field the value was supplied for.
        field: &'static str,
        /// The rejected symbolic name.
        value: String,
    },
}
