//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_DATA_DIR` - Directory holding the persisted cart store
//!   (default: `data`)

use std::path::PathBuf;

use thiserror::Error;

/// File name of the cart key-value store inside the data directory.
const CART_STORE_FILE: &str = "cart-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding durable state.
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = parse_data_dir(std::env::var("STOREFRONT_DATA_DIR").ok())?;

        Ok(Self { data_dir })
    }

    /// Path of the persisted cart store file.
    #[must_use]
    pub fn cart_store_path(&self) -> PathBuf {
        self.data_dir.join(CART_STORE_FILE)
    }
}

/// Resolve the data directory from a raw environment value.
fn parse_data_dir(raw: Option<String>) -> Result<PathBuf, ConfigError> {
    match raw {
        None => Ok(PathBuf::from("data")),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_DATA_DIR".to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_data_dir_defaults_when_unset() {
        let dir = parse_data_dir(None).unwrap();
        assert_eq!(dir, Path::new("data"));
    }

    #[test]
    fn test_data_dir_uses_env_value() {
        let dir = parse_data_dir(Some("/var/lib/atelier".to_string())).unwrap();
        assert_eq!(dir, Path::new("/var/lib/atelier"));
    }

    #[test]
    fn test_data_dir_rejects_empty_value() {
        let err = parse_data_dir(Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_cart_store_path() {
        let config = StorefrontConfig {
            data_dir: PathBuf::from("/tmp/atelier"),
        };
        assert_eq!(
            config.cart_store_path(),
            Path::new("/tmp/atelier/cart-store.json")
        );
    }
}
