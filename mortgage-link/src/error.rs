use thiserror::Error;

/// Errors raised while encoding or decoding a share token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A form value does not fit its wire field.
    #[error("field {field} value {value} is outside 0..={max}")]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    /// The token contains characters outside the URL-safe Base64 alphabet.
    #[error("token is not URL-safe base64: {0}")]
    InvalidToken(#[from] base64::DecodeError),

    /// The token decodes to the wrong number of bytes for its schema.
    #[error("token decodes to {actual} bytes, expected {expected}")]
    UnexpectedLength { expected: usize, actual: usize },
}
