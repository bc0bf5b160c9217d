//! Token signing configuration.
//!
//! The signing secret lives in a JSON settings file (default
//! `appsettings.json` in the working directory, overridable with
//! `APP_SETTINGS`) under the `Secret` key:
//!
//! ```json
//! { "Secret": "change-me" }
//! ```
//!
//! `JWT_SECRET` in the environment takes precedence over the file. The
//! configuration is read once at startup and shared read-only afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;

pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

/// Three hours.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

#[derive(Deserialize)]
struct SettingsFile {
    #[serde(rename = "Secret")]
    secret: String,
}

impl JwtConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY);

        if let Ok(secret) = env::var("JWT_SECRET") {
            return Self::new(secret, access_token_expiry);
        }

        let path = env::var("APP_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE));

        Self::from_settings_file(&path, access_token_expiry)
    }

    pub fn from_settings_file(path: &Path, access_token_expiry: i64) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: SettingsFile =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(settings.secret, access_token_expiry)
    }

    pub fn new(secret: String, access_token_expiry: i64) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("appsettings-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_from_settings_file_reads_secret() {
        let path = write_settings(r#"{ "Secret": "file-secret", "Other": 1 }"#);

        let config = JwtConfig::from_settings_file(&path, DEFAULT_ACCESS_TOKEN_EXPIRY).unwrap();

        assert_eq!(config.secret, "file-secret");
        assert_eq!(config.access_token_expiry, 10800);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_from_settings_file_missing_file() {
        let path = env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));

        let result = JwtConfig::from_settings_file(&path, DEFAULT_ACCESS_TOKEN_EXPIRY);

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_settings_file_without_secret_key() {
        let path = write_settings(r#"{ "Logging": {} }"#);

        let result = JwtConfig::from_settings_file(&path, DEFAULT_ACCESS_TOKEN_EXPIRY);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_secret_rejected() {
        let path = write_settings(r#"{ "Secret": "  " }"#);

        let result = JwtConfig::from_settings_file(&path, DEFAULT_ACCESS_TOKEN_EXPIRY);

        assert!(matches!(result, Err(ConfigError::EmptySecret)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = JwtConfig::new("super-secret-value".to_string(), 60).unwrap();

        let printed = format!("{:?}", config);

        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("60"));
    }
}
