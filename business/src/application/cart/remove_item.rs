use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::SharedCart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<MutationOutcome, CartError> {
        self.logger.info(&format!(
            "Removing bike {} for {}",
            params.item_id, params.rental_period
        ));

        let outcome = self
            .cart
            .lock()
            .await
            .remove_item(params.item_id, params.rental_period);

        self.logger.info(&format!("Cart removal {}", outcome));
        Ok(outcome)
    }
}
