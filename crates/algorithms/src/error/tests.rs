use super::*;

#[test]
fn test_error_conversion() {
    // Parameter error
    let err = Error::param("bits", "must be in 1..=32");
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidParameter { context, .. } => {
            assert_eq!(context, "bits");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    // Length error
    let err = Error::Length {
        context: "packed polynomial",
        expected: 288,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidLength { context, expected, actual } => {
            assert_eq!(context, "packed polynomial");
            assert_eq!(expected, 288);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }
}

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    // Length validation
    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();

    match err {
        Error::Length { context, expected, actual } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    assert!(validate::min_length("buffer", 8, 16).is_err());
}

#[test]
fn test_processing_maps_to_other() {
    let err = Error::Processing {
        operation: "XOF",
        details: "Cannot absorb after padding",
    };
    match CoreError::from(err) {
        CoreError::Other { context, .. } => assert_eq!(context, "XOF"),
        other => panic!("unexpected: {:?}", other),
    }
}
