use thiserror::Error;

#[derive(Error, Debug)]
pub enum BincryptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid chunk size: {0}. Must be at least 1 byte")]
    InvalidChunkSize(usize),

    #[error("Split mode requires a key sink")]
    MissingKeySink,

    #[error("Output path cannot be empty")]
    EmptyOutputPath,
}

pub type Result<T> = std::result::Result<T, BincryptError>;
