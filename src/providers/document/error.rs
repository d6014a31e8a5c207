use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}. Please upload a .txt or .pdf file")]
    UnsupportedType(String),

    #[error("Failed to read document: {0}")]
    ParseFailure(String),
}
