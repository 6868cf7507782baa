use thiserror::Error;

/// Errors returned by payload conversion and field extraction.
///
/// # Examples
/// ```
/// use sigparse_core::PayloadError;
///
/// let err = PayloadError::TooShort { needed: 5, actual: 3 };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload value is not a hex string")]
    NonStringPayload,
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
