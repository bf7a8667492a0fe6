//! Validation helpers for the fixed-size API types

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_checks() {
        assert!(length("ct", 48, 48).is_ok());
        let err = length("ct", 47, 48).unwrap_err();
        assert!(err.is_length_mismatch());
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "ct",
                expected: 48,
                actual: 47
            }
        );
    }
}
