// tests/src/suites/kat/error.rs
//! Error type of the known-answer loader and runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field {field} has {actual} bytes, expected {expected}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("vector {count}: {field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        count: u32,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, KatError>;

impl From<sparrow_api::Error> for KatError {
    fn from(e: sparrow_api::Error) -> Self {
        KatError::Crypto(e.to_string())
    }
}
