use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::SharedCart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub cart: SharedCart,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartQuantityParams,
    ) -> Result<MutationOutcome, CartError> {
        self.logger.info(&format!(
            "Setting bike {} for {} to {}",
            params.item_id, params.rental_period, params.quantity
        ));

        // The engine does no availability checks; the ceiling is applied here.
        let quantity = match self.catalog.get_by_id(params.item_id).await {
            Ok(entry) => {
                let clamped = entry.clamp_quantity(params.quantity);
                if clamped != params.quantity {
                    self.logger.info(&format!(
                        "Clamped bike {} quantity to availability {}",
                        entry.id, clamped
                    ));
                }
                clamped
            }
            Err(RepositoryError::NotFound) => {
                self.logger.warn(&format!(
                    "Bike {} no longer in catalog, updating unclamped",
                    params.item_id
                ));
                params.quantity
            }
            Err(other) => return Err(CartError::Repository(other)),
        };

        let outcome =
            self.cart
                .lock()
                .await
                .update_quantity(params.item_id, params.rental_period, quantity);

        self.logger
            .info(&format!("Cart quantity update {}", outcome));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockCatalogRepo, bike, candidate, mock_logger, ready_cart,
    };
    use crate::domain::cart::outcome::IgnoreReason;
    use crate::domain::shared::value_objects::{ItemId, RentalPeriod};
    use rust_decimal_macros::dec;

    fn params(item_id: u64, quantity: i64) -> UpdateCartQuantityParams {
        UpdateCartQuantityParams {
            item_id: ItemId::new(item_id),
            rental_period: RentalPeriod::new("1 day"),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_clamp_quantity_to_availability_ceiling() {
        let (cart, _store) = ready_cart().await;
        cart.lock().await.add_item(candidate(1, "1 day", 1, dec!(45)));
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|id| Ok(bike(id.value(), 4)));

        let use_case = UpdateCartQuantityUseCaseImpl {
            cart: cart.clone(),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1, 10)).await;

        assert!(matches!(result, Ok(MutationOutcome::Updated { quantity: 4 })));
        assert_eq!(cart.lock().await.total_amount(), dec!(180));
    }

    #[tokio::test]
    async fn should_ignore_zero_quantity() {
        let (cart, _store) = ready_cart().await;
        cart.lock().await.add_item(candidate(1, "1 day", 3, dec!(45)));
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|id| Ok(bike(id.value(), 4)));

        let use_case = UpdateCartQuantityUseCaseImpl {
            cart: cart.clone(),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1, 0)).await;

        assert!(matches!(
            result,
            Ok(MutationOutcome::Ignored(IgnoreReason::NonPositiveQuantity))
        ));
        assert_eq!(cart.lock().await.item_count(), 3);
    }

    #[tokio::test]
    async fn should_update_unclamped_when_item_left_catalog() {
        let (cart, _store) = ready_cart().await;
        cart.lock().await.add_item(candidate(7, "1 day", 1, dec!(45)));
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCartQuantityUseCaseImpl {
            cart: cart.clone(),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(7, 6)).await;

        assert!(matches!(result, Ok(MutationOutcome::Updated { quantity: 6 })));
    }

    #[tokio::test]
    async fn should_ignore_unrepresentable_quantity_for_item_left_catalog() {
        let (cart, _store) = ready_cart().await;
        cart.lock().await.add_item(candidate(7, "1 day", 1, dec!(45)));
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCartQuantityUseCaseImpl {
            cart: cart.clone(),
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(7, i64::MAX)).await;

        assert!(matches!(
            result,
            Ok(MutationOutcome::Ignored(IgnoreReason::OutOfRange))
        ));
        assert_eq!(cart.lock().await.total_amount(), dec!(45));
    }

    #[tokio::test]
    async fn should_report_missing_line() {
        let (cart, _store) = ready_cart().await;
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_by_id().returning(|id| Ok(bike(id.value(), 4)));

        let use_case = UpdateCartQuantityUseCaseImpl {
            cart,
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1, 2)).await;

        assert!(matches!(
            result,
            Ok(MutationOutcome::Ignored(IgnoreReason::NotInCart))
        ));
    }
}
