use std::env;
use std::path::PathBuf;

/// Source of the rental catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The demo fleet compiled into the binary
    Bundled,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub source: CatalogSource,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_PATH: JSON catalog file (default: bundled catalog)
    pub fn from_env() -> Self {
        Self::from_value(env::var("CATALOG_PATH").ok())
    }

    fn from_value(path: Option<String>) -> Self {
        let source = match path {
            Some(path) if !path.trim().is_empty() => CatalogSource::File(PathBuf::from(path)),
            _ => CatalogSource::Bundled,
        };
        Self { source }
    }
}
