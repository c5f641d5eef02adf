use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::MutationOutcome;

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<MutationOutcome, CartError>;
}
