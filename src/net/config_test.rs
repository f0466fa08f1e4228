use super::*;

#[test]
fn default_points_at_noroff() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.api_key, None);
}

#[test]
fn from_values_blank_falls_back_to_defaults() {
    assert_eq!(ApiConfig::from_values(None, None), ApiConfig::default());
    assert_eq!(ApiConfig::from_values(Some("   "), Some("")), ApiConfig::default());
}

#[test]
fn from_values_trims_trailing_slash() {
    let cfg = ApiConfig::from_values(Some("http://localhost:8080/"), Some(" key-1 "));
    assert_eq!(cfg.base_url, "http://localhost:8080");
    assert_eq!(cfg.api_key.as_deref(), Some("key-1"));
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.endpoint("/auth/login"), "https://v2.api.noroff.dev/auth/login");
}

#[test]
fn headers_without_key_or_token() {
    let headers = ApiConfig::default().headers(None);
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn headers_with_key_and_token() {
    let cfg = ApiConfig::from_values(None, Some("abc"));
    let headers = cfg.headers(Some("tok"));
    assert!(headers.contains(&(API_KEY_HEADER, "abc".to_owned())));
    assert!(headers.contains(&("Authorization", "Bearer tok".to_owned())));
}

#[test]
fn headers_skip_empty_token() {
    let headers = ApiConfig::default().headers(Some(""));
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
}
