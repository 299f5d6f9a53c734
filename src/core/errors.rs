use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum AsadoError {
    /// Balances were requested for an event without participants
    #[error("Event has no participants")]
    NoParticipants,

    /// Nothing has been spent yet; valid but empty
    #[error("Event has no expenses")]
    NoExpenses,

    /// Amount rejected at the boundary (negative, zero, too large or too precise)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Event {0} not found")]
    EventNotFound(String),

    #[error("Event {0} already exists")]
    EventAlreadyExists(String),

    #[error("Participant {0} not found")]
    ParticipantNotFound(String),

    #[error("Participant {0} already exists")]
    ParticipantAlreadyExists(String),

    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    #[error("Category {0} not found")]
    CategoryNotFound(String),

    #[error("Category {0} already exists")]
    CategoryAlreadyExists(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

impl AsadoError {
    /// True for the "nothing to show yet" conditions, which callers render as
    /// an empty state rather than a failure.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, AsadoError::NoParticipants | AsadoError::NoExpenses)
    }
}
