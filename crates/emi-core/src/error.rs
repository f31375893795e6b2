use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiError {
    /// A raw input field was below zero. Always reported ahead of
    /// `InvalidInput`.
    #[error("Negative value: {field} cannot be negative")]
    NegativeValue { field: String },

    /// A required field was zero, not a number, or the combined tenure was zero.
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl EmiError {
    /// Stable tag identifying the error kind, for callers that branch on it.
    pub fn kind(&self) -> &'static str {
        match self {
            EmiError::NegativeValue { .. } => "NegativeValueError",
            EmiError::InvalidInput { .. } => "InvalidInputError",
            EmiError::SerializationError(_) => "SerializationError",
        }
    }

    /// Message suitable for showing to the person who typed the inputs.
    pub fn user_message(&self) -> String {
        match self {
            EmiError::NegativeValue { .. } => {
                "Input values cannot be negative. Please enter a positive number.".to_string()
            }
            EmiError::InvalidInput { .. } => {
                "Please enter valid, positive values for all fields to perform a calculation."
                    .to_string()
            }
            EmiError::SerializationError(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for EmiError {
    fn from(e: serde_json::Error) -> Self {
        EmiError::SerializationError(e.to_string())
    }
}
