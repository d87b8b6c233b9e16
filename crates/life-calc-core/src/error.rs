use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unrecognized repayment method: {0}")]
    InvalidMethod(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LifeCalcError {
    fn from(e: serde_json::Error) -> Self {
        LifeCalcError::SerializationError(e.to_string())
    }
}
