use std::path::Path;

use async_trait::async_trait;

use business::domain::catalog::model::CatalogEntry;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ItemId;

use super::record::CatalogEntryRecord;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read-only catalog loaded once from a JSON document.
pub struct StaticCatalogRepository {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalogRepository {
    pub fn from_json(raw: &str) -> Result<Self, RepositoryError> {
        let records: Vec<CatalogEntryRecord> =
            serde_json::from_str(raw).map_err(|_| RepositoryError::Corrupted)?;

        Ok(Self {
            entries: records
                .into_iter()
                .map(CatalogEntryRecord::into_domain)
                .collect(),
        })
    }

    /// The demo fleet shipped with the service.
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|_| RepositoryError::Persistence)?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError> {
        Ok(self.entries.clone())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<CatalogEntry, RepositoryError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
