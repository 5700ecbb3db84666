use super::*;

#[test]
fn defaults_when_unset() {
    let config = AppConfig::from_values(None, None).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.storage_key, "persist:cad_alunos");
}

#[test]
fn api_url_trailing_slash_trimmed() {
    let config = AppConfig::from_values(Some("https://api.escola.com/"), None).unwrap();
    assert_eq!(config.api_base_url, "https://api.escola.com");
}

#[test]
fn api_url_may_be_same_origin_path() {
    let config = AppConfig::from_values(Some("/api"), None).unwrap();
    assert_eq!(config.api_base_url, "/api");
}

#[test]
fn api_url_without_scheme_rejected() {
    assert_eq!(
        AppConfig::from_values(Some("api.escola.com"), None),
        Err(ConfigError::ApiUrl("api.escola.com".to_owned()))
    );
}

#[test]
fn blank_api_url_uses_default() {
    let config = AppConfig::from_values(Some("  "), None).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = AppConfig::from_values(None, Some("DEBUG")).unwrap();
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn unknown_log_level_rejected() {
    assert_eq!(
        AppConfig::from_values(None, Some("loud")),
        Err(ConfigError::LogLevel("loud".to_owned()))
    );
}
