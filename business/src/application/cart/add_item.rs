use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::SharedCart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::NewLineItem;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::cart::use_cases::add_item::{AddCatalogItemParams, AddCatalogItemUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCatalogItemUseCaseImpl {
    pub cart: SharedCart,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCatalogItemUseCase for AddCatalogItemUseCaseImpl {
    async fn execute(&self, params: AddCatalogItemParams) -> Result<MutationOutcome, CartError> {
        self.logger.info(&format!(
            "Adding {} x bike {} for {}",
            params.quantity, params.item_id, params.rental_period
        ));

        let quantity = u32::try_from(params.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(CartError::InvalidQuantity)?;

        let entry = self
            .catalog
            .get_by_id(params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        let rate = entry
            .rate_for(&params.rental_period)
            .ok_or(CartError::RentalPeriodNotOffered)?;

        let mut cart = self.cart.lock().await;

        let requested =
            u64::from(cart.quantity_of(entry.id, &params.rental_period)) + u64::from(quantity);
        if requested > u64::from(entry.availability_ceiling) {
            self.logger.warn(&format!(
                "Bike {} capped at {}, {} requested",
                entry.id, entry.availability_ceiling, requested
            ));
            return Err(CartError::AvailabilityExceeded {
                requested,
                available: entry.availability_ceiling,
            });
        }

        let outcome = cart.add_item(NewLineItem {
            item_id: entry.id,
            rental_period: rate.period.clone(),
            title: entry.title.clone(),
            image: entry.image.clone(),
            quantity,
            unit_price: rate.price,
            duration_hours: rate.duration_hours,
        });

        self.logger.info(&format!(
            "Bike {} {} in cart, {} items total",
            entry.id,
            outcome,
            cart.item_count()
        ));
        Ok(outcome)
    }
}
