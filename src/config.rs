use axum::http::HeaderValue;
use thiserror::Error;

use crate::image_store::IMAGE_EXTENSION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Maximum upload size in bytes
    pub max_upload_size: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    /// The only origin allowed to make cross-origin requests
    pub front_url: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// SQLite database file
    pub database_path: String,
    /// Directory holding content-addressed images
    pub images_dir: String,
    /// Image served when a requested image is missing (name inside `images_dir`)
    pub default_image: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9000".to_string(),
            front_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "./db/mercari.sqlite3".to_string(),
            images_dir: "./images".to_string(),
            default_image: "default.jpg".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = StorageConfig::default();
        let server_defaults = ServerConfig::default();

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or(server_defaults.bind_address);
        let front_url = std::env::var("FRONT_URL").unwrap_or(server_defaults.front_url);

        let database_path = std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path);
        let images_dir = std::env::var("IMAGES_DIR").unwrap_or(defaults.images_dir);
        let default_image = std::env::var("DEFAULT_IMAGE").unwrap_or(defaults.default_image);

        let max_upload_size = parse_upload_size(std::env::var("MAX_UPLOAD_SIZE").ok())?;

        let config = Config {
            server: ServerConfig {
                bind_address,
                front_url,
            },
            storage: StorageConfig {
                database_path,
                images_dir,
                default_image,
            },
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.front_url == "*" || HeaderValue::from_str(&self.server.front_url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "FRONT_URL '{}' is not a valid origin",
                self.server.front_url
            )));
        }

        if !self.storage.default_image.ends_with(IMAGE_EXTENSION) {
            return Err(ConfigError::ValidationError(format!(
                "DEFAULT_IMAGE must end with {IMAGE_EXTENSION}"
            )));
        }

        if self.max_upload_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_UPLOAD_SIZE must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Unset falls back to 50MB; a value that is set must parse.
fn parse_upload_size(raw: Option<String>) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(50 * 1024 * 1024),
        Some(value) => value.trim().parse().map_err(|_| {
            ConfigError::ValidationError(format!(
                "MAX_UPLOAD_SIZE '{value}' is not a byte count"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            max_upload_size: 1024,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_rejects_default_image_with_wrong_extension() {
        let mut config = valid();
        config.storage.default_image = "default.png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_front_url() {
        let mut config = valid();
        config.server.front_url = "http://local\nhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_wildcard_front_url() {
        let mut config = valid();
        config.server.front_url = "*".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_upload_size() {
        let mut config = valid();
        config.max_upload_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_upload_size() {
        assert_eq!(parse_upload_size(None).unwrap(), 50 * 1024 * 1024);
        assert_eq!(parse_upload_size(Some("2048".to_string())).unwrap(), 2048);
        assert!(parse_upload_size(Some("50MB".to_string())).is_err());
        assert!(parse_upload_size(Some("-1".to_string())).is_err());
    }
}
