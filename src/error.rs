use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelecheckError>;

#[derive(Error, Debug)]
pub enum TelecheckError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("'{0}' is not a recognized US state code")]
    InvalidStateCode(String),
    #[error("'{0}' is not a recognized account type code")]
    InvalidAccountType(String),
}
