//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Decapsulation failed: the confirmation tag did not verify
    DecapsulationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True when the error is a fixed-size serialization mismatch
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    /// True when the error reports a rejected confirmation tag
    pub fn is_decapsulation_failure(&self) -> bool {
        matches!(self, Self::DecapsulationFailed { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            },
            Self::InvalidCiphertext { context, .. } => {
                write!(f, "Invalid ciphertext: {}", context)
            },
            Self::DecapsulationFailed { context, .. } => {
                write!(f, "Decapsulation failed: {}", context)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_display() {
        let err = Error::InvalidLength {
            context: "public key",
            expected: 2016,
            actual: 10,
        };
        assert!(err.is_length_mismatch());
        assert!(!err.is_decapsulation_failure());

        #[cfg(feature = "std")]
        assert_eq!(
            err.to_string(),
            "public key: invalid length (expected 2016, got 10)"
        );
    }

    #[test]
    fn test_decapsulation_failure_display() {
        let err = Error::DecapsulationFailed {
            context: "Sparrow-128-1",
            #[cfg(feature = "std")]
            message: String::from("tag mismatch"),
        };
        assert!(err.is_decapsulation_failure());
        assert!(!err.is_length_mismatch());

        #[cfg(feature = "std")]
        assert_eq!(err.to_string(), "Decapsulation failed: Sparrow-128-1");
    }
}
