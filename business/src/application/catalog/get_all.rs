use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::CatalogEntry;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CatalogEntry>, RepositoryError> {
        self.logger.info("Fetching rental catalog");
        let entries = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} bikes in catalog", entries.len()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{MockCatalogRepo, bike, mock_logger};

    #[tokio::test]
    async fn should_return_every_catalog_entry() {
        let mut repository = MockCatalogRepo::new();
        repository
            .expect_get_all()
            .returning(|| Ok(vec![bike(1, 4), bike(2, 1)]));

        let use_case = GetCatalogUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let entries = use_case.execute().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].availability_ceiling, 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut repository = MockCatalogRepo::new();
        repository
            .expect_get_all()
            .returning(|| Err(RepositoryError::Corrupted));

        let use_case = GetCatalogUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(RepositoryError::Corrupted)));
    }
}
