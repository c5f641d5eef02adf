use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::store::JsonCartStore;
use persistence::catalog::repository::StaticCatalogRepository;
use persistence::storage::file::FileStorage;

use business::application::cart::add_item::AddCatalogItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_summary::{GetCartSummaryUseCaseImpl, GetQuantityUseCaseImpl};
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::session::{SharedCart, shared_cart};
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::get_all::GetCatalogUseCaseImpl;
use business::domain::logger::Logger;

use crate::config::catalog_config::{CatalogConfig, CatalogSource};
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    /// The one cart this process serves; hydrated and flushed by `main`.
    pub cart: SharedCart,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig, catalog: &CatalogConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let mut file_storage = FileStorage::new(storage.dir.clone());
        if let Some(quota) = storage.quota_bytes {
            file_storage = file_storage.with_quota(quota);
        }
        let cart_store = Arc::new(JsonCartStore::new(
            Arc::new(file_storage),
            storage.key.clone(),
            logger.clone(),
        ));

        let catalog_repository = Arc::new(match &catalog.source {
            CatalogSource::Bundled => StaticCatalogRepository::bundled()?,
            CatalogSource::File(path) => StaticCatalogRepository::from_path(path).await?,
        });
        logger.info(&format!(
            "Catalog loaded with {} bikes",
            catalog_repository.len()
        ));

        let cart = shared_cart(cart_store, logger.clone());

        // Cart use cases
        let add_item_use_case = Arc::new(AddCatalogItemUseCaseImpl {
            cart: cart.clone(),
            catalog: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            cart: cart.clone(),
            catalog: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let summary_use_case = Arc::new(GetCartSummaryUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let quantity_use_case = Arc::new(GetQuantityUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            repository: catalog_repository,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(summary_use_case.clone());
        let catalog_api = crate::api::catalog::routes::CatalogApi::new(get_catalog_use_case);
        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            summary_use_case,
            quantity_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            cart,
        })
    }
}
