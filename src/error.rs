use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordMergeError {
    #[error("cannot open source file {0}")]
    OpenSource(String),

    #[error("cannot create destination file {0}")]
    CreateDestination(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WordMergeError {
    fn from(err: std::io::Error) -> Self {
        WordMergeError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WordMergeError>;
