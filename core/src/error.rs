use thiserror::Error;

/// Rejected hours input. The store is never touched when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a number between 1 and 24.")]
    NotANumber(String),
    #[error("Please enter a number between 1 and 24.")]
    OutOfRange(i64),
}

impl ValidationError {
    /// The raw input behind the error, for logging.
    pub fn detail(&self) -> String {
        match self {
            ValidationError::NotANumber(input) => format!("not a number: {:?}", input),
            ValidationError::OutOfRange(value) => format!("out of range: {}", value),
        }
    }
}
