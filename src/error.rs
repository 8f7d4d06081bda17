// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog: {0}")]
    Catalog(String),

    #[error("Invalid options: {0}")]
    Options(String),
}

impl From<std::io::Error> for ScrapeError {
    fn from(error: std::io::Error) -> Self {
        ScrapeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(error: reqwest::Error) -> Self {
        ScrapeError::Http(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
