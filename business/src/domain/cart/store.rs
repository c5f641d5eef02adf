use async_trait::async_trait;

use super::model::CartSnapshot;

/// Durable home of the cart between sessions.
///
/// Both operations are infallible by contract: implementations absorb and
/// log storage failures. `load` substitutes an empty snapshot when the
/// stored value is missing or unreadable, and a failed `save` is dropped.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self) -> CartSnapshot;
    async fn save(&self, snapshot: &CartSnapshot);
}
