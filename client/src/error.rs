use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid daemon host: {0}")]
    InvalidHost(String),

    #[error("operation not supported by this transport: {0}")]
    Unsupported(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
