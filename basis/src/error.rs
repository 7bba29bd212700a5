use thiserror::Error;

/// Errors raised by the basis and determinant containers.
///
/// Every operation validates before it mutates, so an `Err` always leaves the
/// receiver exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasisError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BasisError>;

impl BasisError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BasisError::InvalidArgument(msg.into())
    }
}
