use thiserror::Error;

/// Errors returned by segment decoding.
///
/// Note: this error type is re-exported from the crate root.
///
/// # Examples
/// ```
/// use romheader_core::SegmentError;
///
/// let err = SegmentError::TooShort { needed: 8, actual: 2 };
/// assert!(err.to_string().contains("segment too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("segment too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid region code {code:?}: first character is not a hex digit")]
    InvalidRegionCode { code: String },
    #[error("no decoder for field '{name}'")]
    UnknownField { name: String },
}
