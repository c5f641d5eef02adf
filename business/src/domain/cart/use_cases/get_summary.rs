use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItem;
use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

/// Read model of the cart for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    /// Sum of quantities, not the number of lines.
    pub item_count: u64,
    /// False until the persisted cart has been loaded.
    pub is_ready: bool,
}

pub struct GetQuantityParams {
    pub item_id: ItemId,
    pub rental_period: RentalPeriod,
}

#[async_trait]
pub trait GetCartSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartSummary, CartError>;
}

#[async_trait]
pub trait GetQuantityUseCase: Send + Sync {
    async fn execute(&self, params: GetQuantityParams) -> Result<u32, CartError>;
}
