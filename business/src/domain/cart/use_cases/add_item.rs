use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

pub struct AddCatalogItemParams {
    pub item_id: ItemId,
    pub rental_period: RentalPeriod,
    pub quantity: i64,
}

#[async_trait]
pub trait AddCatalogItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCatalogItemParams) -> Result<MutationOutcome, CartError>;
}
