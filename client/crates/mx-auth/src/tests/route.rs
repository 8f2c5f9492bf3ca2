use crate::Route;

#[test]
fn given_known_paths_when_parse_then_matching_routes() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/login"), Route::Login { error: None });
    assert_eq!(Route::parse("/register/"), Route::Register);
}

#[test]
fn given_login_with_error_query_when_parse_then_error_captured() {
    assert_eq!(
        Route::parse("/login?error=oauth_failed"),
        Route::Login {
            error: Some("oauth_failed".to_string())
        }
    );
}

#[test]
fn given_callback_when_parse_then_query_kept_verbatim() {
    assert_eq!(
        Route::parse("/auth/callback?id=42&email=a%40b.com"),
        Route::AuthCallback {
            query: "id=42&email=a%40b.com".to_string()
        }
    );
}

#[test]
fn given_unknown_path_when_parse_then_not_found() {
    let route = Route::parse("/settings");
    assert_eq!(
        route,
        Route::NotFound {
            path: "/settings".to_string()
        }
    );
    assert_eq!(route.path(), "/settings");
    assert!(!route.is_protected());
}

#[test]
fn test_route_classification() {
    assert!(Route::Home.is_protected());
    assert!(!Route::Home.is_guest_only());
    assert!(Route::Register.is_guest_only());
    assert!(Route::Login { error: None }.is_guest_only());
    assert!(!Route::AuthCallback { query: String::new() }.is_guest_only());
}
