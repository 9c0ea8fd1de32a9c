use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("read error: {0}")]
    Read(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("file write error: {0}")]
    FileWrite(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self { AppError::Network(format!("{}", e)) }
}
