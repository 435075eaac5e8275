use super::*;

// =============================================================
// service_message
// =============================================================

#[test]
fn strips_the_error_prefix() {
    let message = service_message(Some("Error: invalid credentials".to_owned()));
    assert_eq!(message, "invalid credentials");
}

#[test]
fn passes_unprefixed_messages_through() {
    let message = service_message(Some("account disabled".to_owned()));
    assert_eq!(message, "account disabled");
}

#[test]
fn missing_message_falls_back_to_generic_copy() {
    assert_eq!(service_message(None), GENERIC_ERROR);
}

#[test]
fn prefix_is_only_stripped_from_the_front() {
    let message = service_message(Some("bad input: Error: nested".to_owned()));
    assert_eq!(message, "bad input: Error: nested");
}

// =============================================================
// AuthError messages
// =============================================================

#[test]
fn transport_errors_surface_the_connectivity_copy() {
    assert_eq!(AuthError::Transport.message(), CONNECTIVITY_ERROR);
}

#[test]
fn service_errors_surface_their_message() {
    let err = AuthError::Service("invalid credentials".to_owned());
    assert_eq!(err.message(), "invalid credentials");
}

#[test]
fn invalid_response_surfaces_the_generic_copy() {
    assert_eq!(AuthError::InvalidResponse.message(), GENERIC_ERROR);
}
