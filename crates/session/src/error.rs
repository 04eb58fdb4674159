//! Session error types.

use account_store::{AccountError, StorageError};
use entities::StressLevelOutOfRange;
use questionnaire::QuestionnaireError;
use thiserror::Error;

use crate::Notification;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation needs a logged-in user.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// No technique with this id in the user's library.
    #[error("Technique not found: {0}")]
    UnknownTechnique(String),

    /// Stress level outside the scale.
    #[error("Invalid stress level: {0}")]
    InvalidStressLevel(#[from] StressLevelOutOfRange),

    /// Account store error.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Questionnaire error.
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    /// Backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Converts the error into the message shown to the user.
    pub fn notification(&self) -> Notification {
        let message = match self {
            Self::NotAuthenticated => "Войдите в аккаунт, чтобы продолжить",
            Self::UnknownTechnique(_) => "Техника не найдена",
            Self::InvalidStressLevel(_) => "Уровень стресса должен быть от 0 до 10",
            Self::Account(AccountError::DuplicateEmail(_)) => {
                "Пользователь с таким email уже существует"
            }
            Self::Account(AccountError::InvalidCredentials) => "Неверный email или пароль",
            Self::Account(AccountError::MissingField(_)) => "Заполните все поля",
            Self::Account(AccountError::NotFound(_)) => "Пользователь не найден",
            Self::Account(_) | Self::Storage(_) => "Не удалось сохранить данные",
            Self::Questionnaire(QuestionnaireError::NotStarted) => "Тест не запущен",
            Self::Questionnaire(QuestionnaireError::InvalidAnswer(_)) => {
                "Выберите один из вариантов ответа"
            }
        };
        Notification::error(message)
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_are_errors() {
        let cases = [
            SessionError::NotAuthenticated,
            SessionError::Account(AccountError::InvalidCredentials),
            SessionError::Account(AccountError::DuplicateEmail("a@example.com".into())),
            SessionError::Questionnaire(QuestionnaireError::NotStarted),
        ];
        for error in cases {
            assert!(error.notification().is_error());
        }
    }

    #[test]
    fn test_duplicate_email_message() {
        let error = SessionError::Account(AccountError::DuplicateEmail("a@example.com".into()));
        assert_eq!(
            error.notification().message,
            "Пользователь с таким email уже существует"
        );
    }
}
