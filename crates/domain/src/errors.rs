use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Unreconciled record counts: {declared} declared, {decoded} decoded")]
    UnreconciledCounts { declared: usize, decoded: usize },

    #[error("Buffer overflow: {needed} bytes exceed capacity of {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },

    #[error("Not a response message (flags 0x{0:04x})")]
    NotResponseMessage(u16),

    #[error("Response carries no answers")]
    NoAnswers,
}

impl DomainError {
    /// Stable numeric status for callers that report decode results as
    /// integers. Zero is reserved for success.
    pub fn status_code(&self) -> i32 {
        match self {
            DomainError::NotResponseMessage(_) => 1,
            DomainError::NoAnswers => 2,
            DomainError::MalformedName(_) => 3,
            DomainError::MalformedRecord(_) => 4,
            DomainError::TruncatedInput { .. } => 5,
            DomainError::UnreconciledCounts { .. } => 6,
            DomainError::BufferOverflow { .. } => 7,
        }
    }
}
