use dailyboard_core::common::error::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page region not found: {0}")]
    RegionNotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] BoardError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
