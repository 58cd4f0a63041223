use thiserror::Error;

#[derive(Error, Debug)]
pub enum MewsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, MewsError>;
