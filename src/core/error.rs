//! Error types shared across the toolkit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelKitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No such performance measure: {0}")]
    NoSuchMeasure(String),

    #[error("Exhausted: {0}")]
    Exhausted(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, KernelKitError>;
