//! Error handling for the resume extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API communication error: {0}")]
    Api(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;

/// Transport-level failures from the generation API are communication
/// errors for the current invocation, never retried here.
impl From<reqwest::Error> for ResumeParserError {
    fn from(err: reqwest::Error) -> Self {
        ResumeParserError::Api(err.to_string())
    }
}

impl From<csv::Error> for ResumeParserError {
    fn from(err: csv::Error) -> Self {
        ResumeParserError::Export(err.to_string())
    }
}
