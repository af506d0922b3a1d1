use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Empty input: {0}")]
    EmptyInput(String),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
