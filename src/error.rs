use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Action not allowed in current phase: {0}")]
    OutOfPhase(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
