use crate::Credentials;

#[test]
fn given_credentials_when_debug_formatted_then_password_redacted() {
    let credentials = Credentials::new("a@b.com", "secret1");

    let debug = format!("{credentials:?}");

    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("secret1"));
}

#[test]
fn given_credentials_when_serialized_then_field_names_match() {
    let credentials = Credentials::new("a@b.com", "secret1");

    let json = serde_json::to_value(&credentials).unwrap();

    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["password"], "secret1");
}
