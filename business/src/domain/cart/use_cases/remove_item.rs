use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

pub struct RemoveCartItemParams {
    pub item_id: ItemId,
    pub rental_period: RentalPeriod,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<MutationOutcome, CartError>;
}
