use super::*;

#[test]
fn from_status_prefers_backend_message() {
    let err = AuthError::from_status(401, Some("Invalid email or password".to_owned()));
    assert_eq!(
        err,
        AuthError::Credential {
            status: 401,
            message: "Invalid email or password".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn from_status_falls_back_when_body_has_no_message() {
    let err = AuthError::from_status(503, None);
    assert_eq!(err.to_string(), "request failed: 503");
}

#[test]
fn from_status_treats_blank_message_as_missing() {
    let err = AuthError::from_status(400, Some("   ".to_owned()));
    assert_eq!(err.to_string(), "request failed: 400");
}

#[test]
fn network_error_names_the_cause() {
    let err = AuthError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "could not reach the server: connection refused");
}

#[test]
fn validation_error_displays_message_verbatim() {
    let err = AuthError::Validation("Passwords do not match.".to_owned());
    assert_eq!(err.to_string(), "Passwords do not match.");
}
