//! Build-time configuration for the browser app.
//!
//! WASM has no process environment, so values are read with `option_env!`
//! when the crate is compiled:
//!
//! - `CADASTRO_API_URL`: backend base URL (default `http://localhost:3001`)
//! - `CADASTRO_LOG_LEVEL`: `error|warn|info|debug|trace` (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
/// Storage key for the persisted session snapshot.
pub const STORAGE_KEY: &str = "persist:cad_alunos";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CADASTRO_API_URL: {0}")]
    ApiUrl(String),
    #[error("unknown CADASTRO_LOG_LEVEL: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            storage_key: STORAGE_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build typed config from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("CADASTRO_API_URL"), option_env!("CADASTRO_LOG_LEVEL"))
    }

    /// Like `from_env`, but invalid values fall back to defaults.
    #[must_use]
    pub fn from_env_or_default() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub(crate) fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_api_url(api_url)?,
            storage_key: STORAGE_KEY.to_owned(),
            log_level: parse_log_level(log_level)?,
        })
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/')) {
        return Err(ConfigError::ApiUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(level) => level.parse::<log::Level>().map_err(|_| ConfigError::LogLevel(level.to_owned())),
    }
}
