use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_empty_uses_defaults() {
    let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base_url, "http://localhost:5000/api");
}

#[test]
fn from_lookup_trims_trailing_slash_and_whitespace() {
    let config = ClientConfig::from_lookup(lookup_from(&[
        (API_URL_VAR, "  https://api.rentit.test/api/  "),
        (IMAGE_BASE_URL_VAR, "https://img.rentit.test/"),
    ]))
    .unwrap();
    assert_eq!(config.api_base_url, "https://api.rentit.test/api");
    assert_eq!(config.image_base_url, "https://img.rentit.test");
}

#[test]
fn from_lookup_blank_value_falls_back_to_default() {
    let config = ClientConfig::from_lookup(lookup_from(&[(API_URL_VAR, "   ")])).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
}

#[test]
fn from_lookup_rejects_non_http_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[(API_URL_VAR, "ftp://files")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUrl { var: API_URL_VAR, value: "ftp://files".to_owned() });
}

#[test]
fn from_lookup_rejects_bad_image_host() {
    let err = ClientConfig::from_lookup(lookup_from(&[(IMAGE_BASE_URL_VAR, "localhost:5000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { var: IMAGE_BASE_URL_VAR, .. }));
}

#[test]
fn from_env_reads_process_environment() {
    let key_is_unset = std::env::var(API_URL_VAR).is_err();
    if key_is_unset {
        let config = ClientConfig::from_env().unwrap();
        assert!(config.api_base_url.starts_with("http"));
    }
}

#[test]
fn image_url_prefixes_server_relative_paths() {
    let config = ClientConfig::default();
    assert_eq!(config.image_url("/uploads/a.jpg"), "http://localhost:5000/uploads/a.jpg");
}

#[test]
fn image_url_resolves_bare_filenames_under_uploads() {
    let config = ClientConfig::default();
    assert_eq!(config.image_url("b.png"), "http://localhost:5000/uploads/b.png");
}

#[test]
fn image_url_passes_absolute_urls_through() {
    let config = ClientConfig::default();
    assert_eq!(config.image_url("https://cdn.test/c.jpg"), "https://cdn.test/c.jpg");
}
