use crate::{CoreError, Identity};

use chrono::{TimeZone, Utc};

fn created_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn test_identity_new_valid() {
    let identity = Identity::new(42, "a@b.com", Some("google".into()), created_at()).unwrap();
    assert_eq!(identity.id, 42);
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.oauth_provider.as_deref(), Some("google"));
    assert!(identity.is_oauth());
}

#[test]
fn test_identity_new_empty_email_rejected() {
    let result = Identity::new(1, "   ", None, created_at());
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_identity_empty_provider_is_none() {
    let identity = Identity::new(1, "a@b.com", Some(String::new()), created_at()).unwrap();
    assert!(identity.oauth_provider.is_none());
    assert!(!identity.is_oauth());
}

#[test]
fn test_identity_parse_id() {
    assert_eq!(Identity::parse_id("42").unwrap(), 42);
    assert_eq!(Identity::parse_id(" 7 ").unwrap(), 7);
    assert!(Identity::parse_id("").is_err());
    assert!(Identity::parse_id("abc").is_err());
}

#[test]
fn test_identity_deserialize_server_shape() {
    let json = r#"{"id":5,"email":"x@y.io","created_at":"2024-01-01T00:00:00Z"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, 5);
    assert!(identity.oauth_provider.is_none());
    assert_eq!(identity.created_at, created_at());
}

#[test]
fn test_identity_serialize_omits_absent_provider() {
    let identity = Identity::new(5, "x@y.io", None, created_at()).unwrap();
    let json = serde_json::to_string(&identity).unwrap();
    assert!(!json.contains("oauth_provider"));
}
