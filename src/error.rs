use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
