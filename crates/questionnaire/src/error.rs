//! Questionnaire error types.

use thiserror::Error;

/// Errors that can occur while answering a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// An answer was given while no questionnaire is running.
    #[error("No questionnaire in progress")]
    NotStarted,

    /// Answer value outside the scale.
    #[error("Invalid answer {0}, expected 0 to {max}", max = crate::MAX_ANSWER)]
    InvalidAnswer(u8),
}

/// Result type for questionnaire operations.
pub type QuestionnaireResult<T> = Result<T, QuestionnaireError>;
