//! Tests for error classification logic

use flexudy_gateway::client::error_classification::{
    user_friendly_message, PollStatus, HTTP_FORBIDDEN_MESSAGE, HTTP_UNAUTHORIZED_MESSAGE,
};
use flexudy_gateway::{Environment, Error, ErrorKind, GatewayClient};

#[test]
fn test_licensing_statuses_get_hints() {
    assert_eq!(user_friendly_message(401, "ignored"), HTTP_UNAUTHORIZED_MESSAGE);
    assert_eq!(user_friendly_message(403, ""), HTTP_FORBIDDEN_MESSAGE);
}

#[test]
fn test_other_statuses_carry_body() {
    for status in [400u16, 409, 429, 500, 502, 503] {
        let message = user_friendly_message(status, "details");
        assert_eq!(
            message,
            format!(
                "An error occurred during processing, Status Code: {}, message: details",
                status
            )
        );
    }
}

#[test]
fn test_only_404_is_pending() {
    for status in 100u16..600 {
        let expected = match status {
            200..=299 => PollStatus::Ready,
            404 => PollStatus::Pending,
            _ => PollStatus::Failed,
        };
        assert_eq!(PollStatus::from_http_status(status), expected, "status {}", status);
    }
}

#[test]
fn test_remote_errors_are_not_local() {
    let err = Error::remote(500, "boom");
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.kind().category(), "remote");
    assert!(!err.kind().is_local());
}

#[test]
fn test_local_kinds() {
    for kind in [
        ErrorKind::Validation,
        ErrorKind::Configuration,
        ErrorKind::Io,
        ErrorKind::Decode,
    ] {
        assert!(kind.is_local(), "{:?} should be local", kind);
    }
    for kind in [
        ErrorKind::Transport,
        ErrorKind::Remote,
        ErrorKind::Cancelled,
        ErrorKind::Timeout,
    ] {
        assert!(!kind.is_local(), "{:?} should not be local", kind);
    }
}

#[test]
fn test_unknown_environment_is_configuration_error() {
    let err = "staging".parse::<Environment>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_blank_license_key_falls_through() {
    // A blank explicit key is ignored; the result then depends on the keyring
    // and FLEXUDY_LICENSE_KEY, but never yields a client with an empty key.
    if let Ok(client) = GatewayClient::builder()
        .license_key("   ")
        .environment(Environment::Sandbox)
        .build()
    {
        assert!(!client.config().license_key.trim().is_empty());
    }
}
