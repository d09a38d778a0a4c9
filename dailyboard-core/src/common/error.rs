use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("database error: {message}")]
    Database { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required field: {0}")]
    MissingField(String),
}

impl From<rusqlite::Error> for BoardError {
    fn from(err: rusqlite::Error) -> Self {
        BoardError::Database {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
