use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::SharedCart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<MutationOutcome, CartError> {
        self.logger.info("Clearing cart");

        let outcome = self.cart.lock().await.clear();

        if let MutationOutcome::Cleared { removed } = outcome {
            self.logger
                .info(&format!("Cleared {} cart lines", removed));
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{candidate, mock_logger, ready_cart};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_remove_every_line_and_persist_empty_cart() {
        let (cart, store) = ready_cart().await;
        {
            let mut engine = cart.lock().await;
            engine.add_item(candidate(1, "1 day", 1, dec!(45)));
            engine.add_item(candidate(2, "3 hours", 2, dec!(15)));
        }

        let use_case = ClearCartUseCaseImpl {
            cart: cart.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;
        cart.lock().await.flush().await;

        assert!(matches!(result, Ok(MutationOutcome::Cleared { removed: 2 })));
        assert_eq!(cart.lock().await.total_amount(), Decimal::ZERO);
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn should_report_zero_removed_for_empty_cart() {
        let (cart, _store) = ready_cart().await;

        let use_case = ClearCartUseCaseImpl {
            cart,
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Ok(MutationOutcome::Cleared { removed: 0 })));
    }
}
