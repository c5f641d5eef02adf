use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ItemId;

use super::model::CatalogEntry;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
    async fn get_by_id(&self, id: ItemId) -> Result<CatalogEntry, RepositoryError>;
}
