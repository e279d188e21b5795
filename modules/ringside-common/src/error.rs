use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingsideError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type RingsideResult<T> = std::result::Result<T, RingsideError>;
