use async_trait::async_trait;

use super::error::StorageError;

/// Browser-local-storage analog: named string blobs.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces whatever is stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

pub fn check_quota(value: &str, quota: Option<usize>) -> Result<(), StorageError> {
    match quota {
        Some(quota) if value.len() > quota => Err(StorageError::QuotaExceeded {
            size: value.len(),
            quota,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_simple_keys() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("cart-v2_backup").is_ok());
    }

    #[test]
    fn should_reject_path_like_keys() {
        for key in ["", "../cart", "carts/1", "cart.json", "ca rt"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey(_))),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn should_enforce_quota_only_when_set() {
        assert!(check_quota("abcdef", None).is_ok());
        assert!(check_quota("abc", Some(3)).is_ok());
        assert!(matches!(
            check_quota("abcd", Some(3)),
            Err(StorageError::QuotaExceeded { size: 4, quota: 3 })
        ));
    }
}
