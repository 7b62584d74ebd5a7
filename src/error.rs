use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwimlaneError>;

#[derive(Debug, Error)]
pub enum SwimlaneError {
    #[error("Duplicate card ID: {0}")]
    DuplicateCardId(String),

    #[error("Invalid card status: {0}")]
    InvalidCardStatus(String),

    #[error("Invalid lane key: {0}")]
    InvalidLaneKey(String),

    #[error("Card {id} has status {status} but sits in lane {lane}")]
    InvariantViolation {
        id: String,
        status: String,
        lane: String,
    },

    #[error("Card source not found: {0}")]
    SourceNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<minijinja::Error> for SwimlaneError {
    fn from(err: minijinja::Error) -> Self {
        Self::RenderError(err.to_string())
    }
}
