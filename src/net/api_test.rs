use super::*;
use serde_json::json;

#[test]
fn profile_path_formats_expected_path() {
    assert_eq!(profile_path("alice"), "/auction/profiles/alice");
}

#[test]
fn profile_path_encodes_reserved_characters() {
    assert_eq!(profile_path("a b/c"), "/auction/profiles/a%20b%2Fc");
}

#[test]
fn status_error_uses_first_upstream_message() {
    let body = json!({
        "errors": [{ "message": "Invalid email or password" }, { "message": "second" }],
        "status": "Unauthorized",
        "statusCode": 401
    });
    assert_eq!(
        status_error(401, Some(&body)),
        ApiError::Status { status: 401, message: "Invalid email or password".to_owned() }
    );
}

#[test]
fn status_error_without_body_formats_status() {
    assert_eq!(
        status_error(500, None),
        ApiError::Status { status: 500, message: "request failed: 500".to_owned() }
    );
    assert_eq!(status_error(404, Some(&json!({ "errors": [] }))).to_string(), "request failed (404): request failed: 404");
}

#[test]
fn http_api_keeps_config() {
    let api = HttpAuthApi::new(ApiConfig::from_values(Some("http://localhost:3000"), None));
    assert_eq!(api.config().endpoint(LOGIN_PATH), "http://localhost:3000/auth/login");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_outside_browser_is_unavailable() {
    let api = HttpAuthApi::default();
    let result = futures::executor::block_on(api.login(&LoginRequest::new("a@b.c", "pw")));
    assert_eq!(result, Err(ApiError::Unavailable));
    let profile = futures::executor::block_on(api.fetch_profile("alice", None));
    assert_eq!(profile, Err(ApiError::Unavailable));
}
