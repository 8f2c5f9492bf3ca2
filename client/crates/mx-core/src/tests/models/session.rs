use crate::{Identity, Session};

use chrono::Utc;

fn identity() -> Identity {
    Identity::new(42, "a@b.com", None, Utc::now()).unwrap()
}

#[test]
fn test_session_default_is_unknown() {
    assert_eq!(Session::default(), Session::Unknown);
    assert!(Session::default().is_unknown());
}

#[test]
fn test_session_identity_only_when_authenticated() {
    assert!(Session::Unknown.identity().is_none());
    assert!(Session::Anonymous.identity().is_none());

    let session = Session::Authenticated(identity());
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|i| i.id), Some(42));
}

#[test]
fn test_session_from_option() {
    assert_eq!(Session::from(None), Session::Anonymous);
    assert!(Session::from(Some(identity())).is_authenticated());
}

#[test]
fn test_session_serializes_with_state_tag() {
    let json = serde_json::to_value(Session::Anonymous).unwrap();
    assert_eq!(json["state"], "anonymous");

    let json = serde_json::to_value(Session::Authenticated(identity())).unwrap();
    assert_eq!(json["state"], "authenticated");
    assert_eq!(json["identity"]["email"], "a@b.com");
}

#[test]
fn test_session_as_str() {
    assert_eq!(Session::Unknown.as_str(), "unknown");
    assert_eq!(Session::Anonymous.as_str(), "anonymous");
    assert_eq!(Session::Authenticated(identity()).as_str(), "authenticated");
}
