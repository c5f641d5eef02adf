use async_trait::async_trait;

use crate::domain::catalog::model::CatalogEntry;
use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
}
