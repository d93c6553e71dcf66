use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Error retrieving token: {0}")]
    TokenRetrieval(String),

    #[error("Error creating user: {0}")]
    UserCreation(String),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Build a token error from the emulator's `error` field, if any.
    pub fn token_retrieval(error: Option<&serde_json::Value>) -> Self {
        HarnessError::TokenRetrieval(describe_emulator_error(error))
    }

    /// Build a user-creation error from the emulator's `error` field, if any.
    pub fn user_creation(error: Option<&serde_json::Value>) -> Self {
        HarnessError::UserCreation(describe_emulator_error(error))
    }
}

/// Render the emulator's error payload, or "Unknown error" when it sent none.
fn describe_emulator_error(error: Option<&serde_json::Value>) -> String {
    match error {
        None | Some(serde_json::Value::Null) => "Unknown error".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
