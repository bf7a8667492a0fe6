//! Error handling for the ring arithmetic and sampling primitives

use alloc::borrow::Cow;
use core::fmt;

use sparrow_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                let context = match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                };
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context,
                    #[cfg(feature = "std")]
                    message: reason.into_owned(),
                }
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Processing { operation, details } => {
                #[cfg(not(feature = "std"))]
                let _ = details;
                CoreError::Other {
                    context: operation,
                    #[cfg(feature = "std")]
                    message: details.into(),
                }
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
