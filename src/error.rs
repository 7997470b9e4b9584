use thiserror::Error;

/// Result type for j2cpp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the j2cpp translator
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Translation error: {0}")]
    Translate(#[from] crate::codegen::TranslateError),
}
