use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = AppConfig::from_values(None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.notice_ttl_ms, DEFAULT_NOTICE_TTL_MS);
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn base_url_is_trimmed() {
    let cfg = AppConfig::from_values(Some(" https://managify.example/api/v1/ "), None);
    assert_eq!(cfg.api_base_url, "https://managify.example/api/v1");
}

#[test]
fn blank_base_url_uses_default() {
    let cfg = AppConfig::from_values(Some("   "), None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn notice_ttl_parses_positive_values_only() {
    assert_eq!(AppConfig::from_values(None, Some("2500")).notice_ttl_ms, 2500);
    assert_eq!(AppConfig::from_values(None, Some("0")).notice_ttl_ms, DEFAULT_NOTICE_TTL_MS);
    assert_eq!(AppConfig::from_values(None, Some("soon")).notice_ttl_ms, DEFAULT_NOTICE_TTL_MS);
}
