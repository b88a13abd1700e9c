use super::*;

#[test]
fn test_kind_classification() {
    assert_eq!(Error::param("curve", "bad field").kind(), ErrorKind::Invalid);
    assert_eq!(
        Error::InvalidLength {
            context: "point",
            expected: 65,
            actual: 64
        }
        .kind(),
        ErrorKind::Invalid
    );
    assert_eq!(
        Error::NotImplemented {
            feature: "compressed points"
        }
        .kind(),
        ErrorKind::NotImplemented
    );
    assert_eq!(
        Error::MoreInfo {
            context: "curve init",
            parameter: "bignum"
        }
        .kind(),
        ErrorKind::MoreInfo
    );
    assert_eq!(Error::not_found("registry", "MD4").kind(), ErrorKind::NotFound);
    assert_eq!(
        Error::Resolution {
            unit: "libfoo".into()
        }
        .kind(),
        ErrorKind::Resolution
    );
}

#[test]
fn test_with_context_keeps_payload() {
    let err = Error::InvalidLength {
        context: "buffer",
        expected: 32,
        actual: 16,
    }
    .with_context("sec decode");

    match err {
        Error::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "sec decode");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    let err = Error::Resolution {
        unit: "prime".into(),
    }
    .with_context("ignored");
    assert_eq!(
        err,
        Error::Resolution {
            unit: "prime".into()
        }
    );
}

#[test]
fn test_display() {
    let err = Error::MoreInfo {
        context: "curve init",
        parameter: "bignum",
    };
    assert_eq!(
        err.to_string(),
        "curve init: missing required parameter 'bignum'"
    );

    let err = Error::not_found("registry lookup", "SHA-512");
    assert_eq!(err.to_string(), "registry lookup: 'SHA-512' not found");
}
