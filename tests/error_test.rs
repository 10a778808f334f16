use huginn::{HuginnError, Result};

#[test]
fn test_error_display() {
    let err = HuginnError::ModelNotFound("some-org/missing-model".to_string());
    assert!(err.to_string().contains("some-org/missing-model"));
}

#[test]
fn test_empty_input_display() {
    let err = HuginnError::EmptyInput;
    assert_eq!(err.to_string(), "empty input");
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(HuginnError::NoBackend)
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Backend availability classification
// ============================================================================

#[test]
fn unavailable_errors() {
    assert!(HuginnError::BackendUnavailable("timed out".into()).is_backend_unavailable());
    assert!(HuginnError::Http("connection reset".into()).is_backend_unavailable());
    assert!(HuginnError::EmptyResponse.is_backend_unavailable());
    assert!(
        HuginnError::Api {
            status: 500,
            message: "internal".into()
        }
        .is_backend_unavailable()
    );
    assert!(
        HuginnError::Api {
            status: 503,
            message: "unavailable".into()
        }
        .is_backend_unavailable()
    );
}

#[test]
fn other_errors_are_not_unavailability() {
    assert!(!HuginnError::EmptyInput.is_backend_unavailable());
    assert!(!HuginnError::AuthenticationFailed.is_backend_unavailable());
    assert!(!HuginnError::ModelNotFound("x".into()).is_backend_unavailable());
    assert!(!HuginnError::NoBackend.is_backend_unavailable());
    assert!(!HuginnError::Configuration("x".into()).is_backend_unavailable());
    assert!(!HuginnError::Data("x".into()).is_backend_unavailable());
    assert!(
        !HuginnError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_backend_unavailable()
    );
    assert!(
        !HuginnError::Api {
            status: 404,
            message: "not found".into()
        }
        .is_backend_unavailable()
    );
}
