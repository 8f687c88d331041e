use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsealError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Precondition Failed: {0}")]
    Precondition(String),

    #[error("Persistence Error: {0}")]
    Persistence(String),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type WsResult<T> = Result<T, WordsealError>;
