use thiserror::Error;

/// An error reading from a characteristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unexpectedly reached the end of the buffer.
    #[error("Unexpectedly reached the end of the buffer ({needed} bytes needed, {remaining} remaining).")]
    EndOfBuffer { needed: usize, remaining: usize },
}

/// Errors occurring while decoding or encoding a characteristic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Encoding is not implemented for this characteristic.
    #[error("Encoding is not supported for this characteristic.")]
    Unsupported,
    /// The buffer does not hold the fields its flags announce.
    #[error("Malformed characteristic value: {0}")]
    Parse(#[from] ParseError),
    /// A value lies outside the domain of its field, such as an unrecognized
    /// enumerant or a value finer than the field's resolution.
    #[error("Value of field `{field}` is outside its domain.")]
    InvalidValue { field: &'static str },
}
