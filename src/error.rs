// Crate-level error for receipt processing.

use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// Submitted receipt is missing a field or carries a malformed value.
    #[error("invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    /// No stored receipt under this identifier.
    #[error("no receipt found for id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
