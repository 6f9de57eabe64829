use thiserror::Error;

use crate::actors::messages::ActorError;

/// Infrastructure failures of the assistant.
///
/// Rejected submissions are not errors; they are reported through
/// [`crate::models::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum AppError {
    /// The session actor could not be reached or did not answer.
    #[error("Session error: {0}")]
    Actor(#[from] ActorError),

    /// A setting or payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A setting could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A bug, such as installing the log subscriber twice.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the session actor has stopped.
    pub fn is_session_closed(&self) -> bool {
        matches!(self, AppError::Actor(ActorError::Closed))
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Invalid settings: {}", err))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(err: dotenv::Error) -> Self {
        AppError::Config(format!("Env file error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_session_detection() {
        assert!(AppError::from(ActorError::Closed).is_session_closed());
        assert!(!AppError::Config("x".into()).is_session_closed());
    }

    #[test]
    fn test_clone_keeps_actor_error() {
        let err = AppError::from(ActorError::Timeout("submit".into()));
        match err.clone() {
            AppError::Actor(inner) => assert_eq!(inner, ActorError::Timeout("submit".into())),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = AppError::from(ActorError::Timeout("snapshot".into()));
        assert_eq!(err.to_string(), "Session error: Operation timed out: snapshot");
    }
}
