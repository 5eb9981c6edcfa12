use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure kinds of the matching engine.
///
/// `InvalidInput` never reaches HTTP callers: the engine answers it with a zeroed result.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service response could not be parsed: {0}")]
    ExternalServiceParseFailure(String),

    #[error("External service unavailable: {0}")]
    ExternalServiceUnavailable(String),
}

impl From<LlmError> for MatchError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(_) | LlmError::Api { .. } => {
                MatchError::ExternalServiceUnavailable(err.to_string())
            }
            LlmError::Parse(_) | LlmError::EmptyContent => {
                MatchError::ExternalServiceParseFailure(err.to_string())
            }
        }
    }
}
