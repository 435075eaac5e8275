use super::*;

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn login_payload_serializes_to_the_two_field_body() {
    let payload = AuthPayload::Login {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
    };
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({"email": "a@b.com", "password": "secret"})
    );
}

#[test]
fn signup_payload_uses_the_camel_case_confirmation_field() {
    let payload = AuthPayload::Signup {
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
    };
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ann",
            "email": "a@b.com",
            "password": "secret",
            "confirmPassword": "secret",
        })
    );
}

#[test]
fn endpoints_follow_the_payload_kind() {
    let login = AuthPayload::Login {
        email: String::new(),
        password: String::new(),
    };
    let signup = AuthPayload::Signup {
        name: String::new(),
        email: String::new(),
        password: String::new(),
        confirm_password: String::new(),
    };
    assert_eq!(login.endpoint(), "/api/auth/login");
    assert_eq!(signup.endpoint(), "/api/auth/signup");
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn success_body_folds_into_a_session() {
    let json = r#"{"token":"t1","id":1,"name":"Ann","email":"a@b.com","role":"user"}"#;
    let response: AuthResponse = serde_json::from_str(json).expect("parse");
    let session = response.into_session();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.id, 1);
    assert_eq!(session.user.name, "Ann");
    assert_eq!(session.user.email, "a@b.com");
    assert_eq!(session.user.role, "user");
}

#[test]
fn success_body_missing_fields_fails_to_parse() {
    let json = r#"{"token":"t1"}"#;
    assert!(serde_json::from_str::<AuthResponse>(json).is_err());
}

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"Error: nope"}"#).expect("parse");
    assert_eq!(with.message.as_deref(), Some("Error: nope"));

    let without: ErrorBody = serde_json::from_str("{}").expect("parse");
    assert_eq!(without.message, None);
}
