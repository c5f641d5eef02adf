use std::env;
use std::path::PathBuf;

use super::error::ConfigError;

/// Where the cart snapshot is kept between runs
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub key: String,
    pub quota_bytes: Option<usize>,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_DIR: Directory holding the snapshot files (default: ".rental-cart")
    /// - CART_STORAGE_KEY: Name of the cart snapshot (default: "cart")
    /// - CART_STORAGE_QUOTA_BYTES: Largest snapshot accepted (default: unlimited)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("CART_STORAGE_DIR").ok(),
            env::var("CART_STORAGE_KEY").ok(),
            env::var("CART_STORAGE_QUOTA_BYTES").ok(),
        )
    }

    fn from_values(
        dir: Option<String>,
        key: Option<String>,
        quota: Option<String>,
    ) -> Result<Self, ConfigError> {
        let quota_bytes = match quota {
            Some(raw) => Some(raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "CART_STORAGE_QUOTA_BYTES",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            dir: PathBuf::from(dir.unwrap_or_else(|| ".rental-cart".to_string())),
            key: key.unwrap_or_else(|| "cart".to_string()),
            quota_bytes,
        })
    }
}
