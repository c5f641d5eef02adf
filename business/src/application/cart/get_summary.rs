use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::SharedCart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::get_summary::{
    CartSummary, GetCartSummaryUseCase, GetQuantityParams, GetQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCartSummaryUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    async fn execute(&self) -> Result<CartSummary, CartError> {
        let engine = self.cart.lock().await;
        let summary = CartSummary {
            items: engine.items().to_vec(),
            total_amount: engine.total_amount(),
            item_count: engine.item_count(),
            is_ready: engine.is_ready(),
        };

        self.logger.debug(&format!(
            "Cart summary: {} lines, {} items, ready={}",
            summary.items.len(),
            summary.item_count,
            summary.is_ready
        ));
        Ok(summary)
    }
}

pub struct GetQuantityUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetQuantityUseCase for GetQuantityUseCaseImpl {
    async fn execute(&self, params: GetQuantityParams) -> Result<u32, CartError> {
        let quantity = self
            .cart
            .lock()
            .await
            .quantity_of(params.item_id, &params.rental_period);

        self.logger.debug(&format!(
            "Bike {} for {} has quantity {}",
            params.item_id, params.rental_period, quantity
        ));
        Ok(quantity)
    }
}
