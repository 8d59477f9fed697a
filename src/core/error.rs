use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeepStateError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    #[error("Unknown agency: {0}")]
    UnknownAgency(String),

    #[error("Technology already researched: {0}")]
    AlreadyResearched(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid rules config: {0}")]
    InvalidConfig(String),

    #[error("Game is over, no further turns can be played")]
    GameOver,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeepStateError>;
