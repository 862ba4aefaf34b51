use super::*;

#[test]
fn status_message_prefers_known_keys() {
    assert_eq!(status_message(r#"{"message":"duplicate key","code":"23505"}"#), "duplicate key");
    assert_eq!(
        status_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(status_message(r#"{"msg":"User already registered"}"#), "User already registered");
}

#[test]
fn status_message_falls_back_to_raw_body() {
    assert_eq!(status_message("  Bad Gateway \n"), "Bad Gateway");
    assert_eq!(status_message(""), "empty response");
    assert_eq!(status_message(r#"{"message":""}"#), r#"{"message":""}"#);
}

#[test]
fn unauthorized_covers_missing_session_and_401() {
    assert!(ApiError::NotAuthenticated.is_unauthorized());
    assert!(ApiError::from_status(401, "{}").is_unauthorized());
    assert!(!ApiError::from_status(403, "{}").is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::from_status(409, r#"{"message":"conflict"}"#);
    assert_eq!(err.to_string(), "backend responded 409: conflict");
}
