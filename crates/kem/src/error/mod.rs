//! Error handling for KEM operations

use core::fmt;
use sparrow_algorithms::error::Error as PrimitiveError;
use sparrow_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Confirmation tag mismatch; no shared secret is produced
    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True for a failed confirmation-tag check
    pub fn is_decapsulation_failure(&self) -> bool {
        matches!(self, Error::Decapsulation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            },
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            },
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            },
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Decapsulation { algorithm, details } => {
                #[cfg(not(feature = "std"))]
                let _ = details;
                CoreError::DecapsulationFailed {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: format!("decapsulation failed: {}", details),
                }
            },
            Error::InvalidKey { key_type, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidKey {
                    context: key_type,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
            Error::InvalidCiphertext { algorithm, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidCiphertext {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
        }
    }
}

// Include validation submodule
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decapsulation_maps_to_core_failure() {
        let err = Error::Decapsulation {
            algorithm: "Sparrow-128-1",
            details: "tag mismatch",
        };
        assert!(err.is_decapsulation_failure());
        let core: CoreError = err.into();
        assert!(core.is_decapsulation_failure());
    }

    #[test]
    fn test_format_errors_keep_their_kind() {
        let core: CoreError = Error::InvalidKey {
            key_type: "Sparrow public",
            reason: "coefficient out of range",
        }
        .into();
        assert!(matches!(core, CoreError::InvalidKey { context: "Sparrow public", .. }));

        let core: CoreError = Error::InvalidCiphertext {
            algorithm: "Sparrow-128-1",
            reason: "tag copies differ",
        }
        .into();
        assert!(matches!(core, CoreError::InvalidCiphertext { context: "Sparrow-128-1", .. }));
    }

    #[test]
    fn test_length_passes_through() {
        let err: Error = PrimitiveError::Length {
            context: "public key",
            expected: 2016,
            actual: 2015,
        }
        .into();
        assert!(!err.is_decapsulation_failure());
        let core: CoreError = err.into();
        assert!(core.is_length_mismatch());
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidKey {
            key_type: "Sparrow secret",
            reason: "coefficient out of range",
        };
        assert_eq!(
            err.to_string(),
            "Invalid Sparrow secret key: coefficient out of range"
        );
    }
}
