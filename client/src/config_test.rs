use super::*;

#[test]
fn from_values_defaults_url_and_trims_trailing_slash() {
    let cfg = BackendConfig::from_values(None, Some("anon")).unwrap();
    assert_eq!(cfg.url, DEFAULT_BACKEND_URL);

    let cfg = BackendConfig::from_values(Some(" https://proj.example.co/ "), Some("anon")).unwrap();
    assert_eq!(cfg.url, "https://proj.example.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_values_requires_anon_key() {
    assert_eq!(
        BackendConfig::from_values(Some("https://x.test"), None),
        Err(ConfigError::MissingAnonKey)
    );
    assert_eq!(
        BackendConfig::from_values(Some("https://x.test"), Some("   ")),
        Err(ConfigError::MissingAnonKey)
    );
}

#[test]
fn from_values_rejects_non_http_url() {
    assert_eq!(
        BackendConfig::from_values(Some("ftp://x.test"), Some("k")),
        Err(ConfigError::InvalidUrl("ftp://x.test".to_owned()))
    );
}

#[test]
fn endpoint_builders_join_paths() {
    let cfg = BackendConfig::from_values(Some("https://x.test"), Some("k")).unwrap();
    assert_eq!(cfg.auth_url("/token?grant_type=password"), "https://x.test/auth/v1/token?grant_type=password");
    assert_eq!(cfg.rest_url("objects?id=eq.1"), "https://x.test/rest/v1/objects?id=eq.1");
    assert_eq!(
        cfg.storage_upload_url(IMAGE_BUCKET, "u1/a.png"),
        "https://x.test/storage/v1/object/object-images/u1/a.png"
    );
    assert_eq!(
        cfg.storage_public_url(IMAGE_BUCKET, "/u1/a.png"),
        "https://x.test/storage/v1/object/public/object-images/u1/a.png"
    );
}
