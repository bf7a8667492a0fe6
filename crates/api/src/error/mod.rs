//! Error handling for the sparrow ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

#[cfg(feature = "std")]
use std::error::Error as StdError;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl StdError for Error {}
