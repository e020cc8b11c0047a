use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClubHubError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument for `{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

impl From<figment::Error> for ClubHubError {
    fn from(e: figment::Error) -> Self {
        ClubHubError::Config(Box::new(e))
    }
}

impl ClubHubError {
    /// Errors caused by what the user typed, as opposed to the runtime.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ClubHubError::UnknownCommand(_) | ClubHubError::InvalidArgument { .. }
        )
    }
}
