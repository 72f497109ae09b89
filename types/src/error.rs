use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypesError {
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid ulimit: {0}")]
    InvalidUlimit(String),

    #[error("invalid isolation mode: {0}")]
    InvalidIsolation(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
