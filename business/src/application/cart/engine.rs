use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::cart::writer::SnapshotWriter;
use crate::domain::cart::command::CartCommand;
use crate::domain::cart::model::{CartSnapshot, LineItem, NewLineItem};
use crate::domain::cart::outcome::MutationOutcome;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// The persisted cart has not been applied yet. Mutations are kept in
    /// memory and nothing is written.
    Uninitialized,
    /// Hydration is done and every change is queued for writing.
    Initialized,
}

/// In-memory cart for one shopper session.
///
/// Mutations apply to memory synchronously and, once hydrated, queue a
/// whole-cart snapshot on a background [`SnapshotWriter`]. Nothing is ever
/// written before the stored cart has been loaded and applied: changes made
/// earlier are recorded and replayed on top of the loaded cart.
///
/// The engine takes no locks; callers sharing it across tasks wrap it (see
/// [`crate::application::cart::session::SharedCart`]).
pub struct CartEngine {
    items: Vec<LineItem>,
    state: EngineState,
    pending: Vec<CartCommand>,
    store: Arc<dyn CartStore>,
    logger: Arc<dyn Logger>,
    writer: Option<SnapshotWriter>,
}

impl CartEngine {
    pub fn new(store: Arc<dyn CartStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            items: Vec::new(),
            state: EngineState::Uninitialized,
            pending: Vec::new(),
            store,
            logger,
            writer: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Initialized
    }

    /// The store this engine hydrates from and writes to.
    pub fn store(&self) -> Arc<dyn CartStore> {
        self.store.clone()
    }

    /// Loads the stored cart and applies it. A second call is a no-op.
    pub async fn hydrate(&mut self) {
        if self.is_ready() {
            self.logger.debug("Cart already hydrated, skipping load");
            return;
        }
        let snapshot = self.store.load().await;
        self.complete_hydration(snapshot);
    }

    /// Applies a snapshot obtained from [`CartStore::load`] and switches the
    /// engine to [`EngineState::Initialized`].
    ///
    /// Must run inside a tokio runtime: it starts the snapshot writer.
    pub fn complete_hydration(&mut self, snapshot: CartSnapshot) {
        if self.is_ready() {
            self.logger
                .warn("Cart already hydrated, ignoring late snapshot");
            return;
        }

        let (snapshot, duplicates) = snapshot.fold_duplicates();
        if duplicates > 0 {
            self.logger.warn(&format!(
                "Folded {} duplicate lines from stored cart",
                duplicates
            ));
        }

        let mut items = snapshot.into_items();
        let loaded = items.len();
        let pending = std::mem::take(&mut self.pending);
        let mut replay_changed = false;
        for command in &pending {
            replay_changed |= command.apply(&mut items).changed();
        }

        self.items = items;
        self.state = EngineState::Initialized;
        self.writer = Some(SnapshotWriter::spawn(
            self.store.clone(),
            self.logger.clone(),
        ));

        self.logger.info(&format!(
            "Cart hydrated with {} stored lines and {} early changes",
            loaded,
            pending.len()
        ));

        if replay_changed || duplicates > 0 {
            self.schedule_save();
        }
    }

    pub fn add_item(&mut self, candidate: NewLineItem) -> MutationOutcome {
        self.execute(CartCommand::AddItem(candidate))
    }

    /// Sets the quantity of an existing line. Zero, negative, or unknown
    /// lines leave the cart as it was.
    pub fn update_quantity(
        &mut self,
        item_id: ItemId,
        rental_period: impl Into<RentalPeriod>,
        quantity: i64,
    ) -> MutationOutcome {
        self.execute(CartCommand::UpdateQuantity {
            item_id,
            rental_period: rental_period.into(),
            quantity,
        })
    }

    pub fn remove_item(
        &mut self,
        item_id: ItemId,
        rental_period: impl Into<RentalPeriod>,
    ) -> MutationOutcome {
        self.execute(CartCommand::RemoveItem {
            item_id,
            rental_period: rental_period.into(),
        })
    }

    pub fn clear(&mut self) -> MutationOutcome {
        self.execute(CartCommand::Clear)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.items.clone())
    }

    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(LineItem::total_price).sum()
    }

    /// Sum of quantities across lines, for "N items" badges.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    pub fn quantity_of(&self, item_id: ItemId, rental_period: &RentalPeriod) -> u32 {
        self.items
            .iter()
            .find(|item| item.matches(item_id, rental_period))
            .map_or(0, LineItem::quantity)
    }

    /// Waits until every queued snapshot has been handed to the store.
    /// Returns at once before hydration, when nothing can be queued.
    pub async fn flush(&self) {
        if let Some(writer) = &self.writer {
            writer.flush().await;
        }
    }

    fn execute(&mut self, command: CartCommand) -> MutationOutcome {
        let outcome = command.apply(&mut self.items);
        self.logger.debug(&format!(
            "Cart {} -> {}",
            command.name(),
            outcome
        ));

        match self.state {
            EngineState::Initialized => {
                if outcome.changed() {
                    self.schedule_save();
                }
            }
            EngineState::Uninitialized => {
                if !command.is_rejected_outright() {
                    self.pending.push(command);
                }
            }
        }

        outcome
    }

    fn schedule_save(&self) {
        if let Some(writer) = &self.writer {
            writer.persist(self.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        RecordingStore, StoreEvent, candidate, line, mock_logger,
    };
    use crate::domain::cart::outcome::IgnoreReason;
    use mockall::mock;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use async_trait::async_trait;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn load(&self) -> CartSnapshot;
            async fn save(&self, snapshot: &CartSnapshot);
        }
    }

    fn day() -> RentalPeriod {
        RentalPeriod::new("1 day")
    }

    async fn hydrated_engine(store: Arc<RecordingStore>) -> CartEngine {
        let mut engine = CartEngine::new(store, mock_logger());
        engine.hydrate().await;
        engine
    }

    #[tokio::test]
    async fn should_follow_add_merge_update_remove_scenario() {
        // Arrange
        let store = Arc::new(RecordingStore::empty());
        let mut engine = hydrated_engine(store.clone()).await;

        // Act + Assert
        engine.add_item(candidate(1, "1 day", 2, dec!(500)));
        assert_eq!(engine.total_amount(), dec!(1000));
        assert_eq!(engine.item_count(), 2);

        let outcome = engine.add_item(candidate(1, "1 day", 1, dec!(500)));
        assert_eq!(outcome, MutationOutcome::Merged { quantity: 3 });
        assert_eq!(engine.items().len(), 1);
        assert_eq!(engine.quantity_of(ItemId::new(1), &day()), 3);
        assert_eq!(engine.items()[0].total_price(), dec!(1500));

        let outcome = engine.update_quantity(ItemId::new(1), "1 day", 0);
        assert_eq!(
            outcome,
            MutationOutcome::Ignored(IgnoreReason::NonPositiveQuantity)
        );
        assert_eq!(engine.quantity_of(ItemId::new(1), &day()), 3);

        engine.remove_item(ItemId::new(1), "1 day");
        assert_eq!(engine.item_count(), 0);
        assert_eq!(engine.total_amount(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn should_return_zero_quantity_for_absent_key() {
        let engine = hydrated_engine(Arc::new(RecordingStore::empty())).await;

        assert_eq!(engine.quantity_of(ItemId::new(42), &day()), 0);
    }

    #[tokio::test]
    async fn should_not_change_quantity_for_negative_update() {
        let store = Arc::new(RecordingStore::empty());
        let mut engine = hydrated_engine(store.clone()).await;
        engine.add_item(candidate(1, "1 day", 3, dec!(500)));
        engine.flush().await;
        let saves_before = store.saved_snapshots().len();

        engine.update_quantity(ItemId::new(1), "1 day", -1);
        engine.flush().await;

        assert_eq!(engine.quantity_of(ItemId::new(1), &day()), 3);
        assert_eq!(store.saved_snapshots().len(), saves_before);
    }

    #[tokio::test]
    async fn should_recompute_total_on_update() {
        let mut engine = hydrated_engine(Arc::new(RecordingStore::empty())).await;
        engine.add_item(candidate(1, "3 hours", 1, dec!(12.50)));

        let outcome = engine.update_quantity(ItemId::new(1), "3 hours", 4);

        assert_eq!(outcome, MutationOutcome::Updated { quantity: 4 });
        assert_eq!(engine.items()[0].total_price(), dec!(50.00));
    }

    #[tokio::test]
    async fn should_produce_same_cart_when_removing_twice() {
        let mut engine = hydrated_engine(Arc::new(RecordingStore::empty())).await;
        engine.add_item(candidate(1, "1 day", 1, dec!(500)));
        engine.add_item(candidate(2, "1 day", 1, dec!(300)));

        engine.remove_item(ItemId::new(1), "1 day");
        let after_once = engine.snapshot();
        let outcome = engine.remove_item(ItemId::new(1), "1 day");

        assert_eq!(outcome, MutationOutcome::Ignored(IgnoreReason::NotInCart));
        assert_eq!(engine.snapshot(), after_once);
    }

    #[tokio::test]
    async fn should_empty_cart_on_clear() {
        let mut engine = hydrated_engine(Arc::new(RecordingStore::empty())).await;
        engine.add_item(candidate(1, "1 day", 1, dec!(500)));
        engine.add_item(candidate(2, "3 hours", 2, dec!(150)));

        let outcome = engine.clear();

        assert_eq!(outcome, MutationOutcome::Cleared { removed: 2 });
        assert!(engine.items().is_empty());
    }

    #[tokio::test]
    async fn should_persist_full_snapshot_after_each_change() {
        let store = Arc::new(RecordingStore::empty());
        let mut engine = hydrated_engine(store.clone()).await;

        engine.add_item(candidate(1, "1 day", 2, dec!(500)));
        engine.flush().await;
        engine.add_item(candidate(2, "1 day", 1, dec!(300)));
        engine.flush().await;

        assert_eq!(store.stored(), engine.snapshot());
        assert_eq!(
            store.events(),
            vec![
                StoreEvent::LoadStarted,
                StoreEvent::LoadFinished,
                StoreEvent::Saved(1),
                StoreEvent::Saved(2),
            ]
        );
    }

    #[tokio::test]
    async fn should_not_write_before_hydration() {
        let mut store = MockStore::new();
        store.expect_save().never();
        store.expect_load().never();
        let mut engine = CartEngine::new(Arc::new(store), mock_logger());

        let outcome = engine.add_item(candidate(1, "1 day", 2, dec!(500)));
        engine.clear();
        engine.flush().await;

        assert_eq!(outcome, MutationOutcome::Added);
        assert!(!engine.is_ready());
        assert_eq!(engine.state(), EngineState::Uninitialized);
    }

    #[tokio::test]
    async fn should_load_exactly_once() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| CartSnapshot::new(vec![line(5, "1 day", 1)]));
        store.expect_save().never();
        let mut engine = CartEngine::new(Arc::new(store), mock_logger());

        engine.hydrate().await;
        engine.hydrate().await;
        engine.flush().await;

        assert!(engine.is_ready());
        assert_eq!(engine.item_count(), 1);
    }

    #[tokio::test]
    async fn should_replay_early_changes_on_top_of_stored_cart() {
        // Arrange
        let stored = CartSnapshot::new(vec![line(1, "1 day", 2), line(2, "3 hours", 1)]);
        let store = Arc::new(RecordingStore::with_snapshot(stored));
        let mut engine = CartEngine::new(store.clone(), mock_logger());

        // Act
        engine.add_item(candidate(1, "1 day", 1, dec!(999)));
        engine.remove_item(ItemId::new(2), "3 hours");
        engine.update_quantity(ItemId::new(3), "1 day", 0);
        assert!(store.events().is_empty());
        engine.hydrate().await;
        engine.flush().await;

        // Assert
        assert_eq!(engine.items().len(), 1);
        assert_eq!(engine.quantity_of(ItemId::new(1), &day()), 3);
        assert_eq!(engine.items()[0].unit_price(), dec!(100));
        assert_eq!(
            store.events(),
            vec![
                StoreEvent::LoadStarted,
                StoreEvent::LoadFinished,
                StoreEvent::Saved(1),
            ]
        );
    }

    #[tokio::test]
    async fn should_not_write_after_hydration_without_changes() {
        let store = Arc::new(RecordingStore::with_snapshot(CartSnapshot::new(vec![line(
            1, "1 day", 2,
        )])));
        let mut engine = CartEngine::new(store.clone(), mock_logger());

        engine.hydrate().await;
        engine.flush().await;

        assert_eq!(
            store.events(),
            vec![StoreEvent::LoadStarted, StoreEvent::LoadFinished]
        );
    }

    #[tokio::test]
    async fn should_fold_duplicates_from_stored_cart_and_rewrite() {
        let stored = CartSnapshot::new(vec![line(1, "1 day", 2), line(1, "1 day", 1)]);
        let store = Arc::new(RecordingStore::with_snapshot(stored));
        let mut engine = CartEngine::new(store.clone(), mock_logger());

        engine.hydrate().await;
        engine.flush().await;

        assert_eq!(engine.items().len(), 1);
        assert_eq!(engine.item_count(), 3);
        assert_eq!(store.stored().len(), 1);
    }

    #[tokio::test]
    async fn should_skip_write_for_ignored_mutations() {
        let store = Arc::new(RecordingStore::empty());
        let mut engine = hydrated_engine(store.clone()).await;

        engine.update_quantity(ItemId::new(1), "1 day", 3);
        engine.remove_item(ItemId::new(1), "1 day");
        engine.clear();
        engine.flush().await;

        assert!(store.saved_snapshots().is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64, bool, u32),
        Update(u64, bool, i64),
        Remove(u64, bool),
    }

    fn period(short: bool) -> &'static str {
        if short { "3 hours" } else { "1 day" }
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u64..5, any::<bool>(), 0u32..6).prop_map(|(id, p, q)| Op::Add(id, p, q)),
            (1u64..5, any::<bool>(), -2i64..6).prop_map(|(id, p, q)| Op::Update(id, p, q)),
            (1u64..5, any::<bool>()).prop_map(|(id, p)| Op::Remove(id, p)),
        ]
    }

    proptest! {
        #[test]
        fn should_keep_merge_keys_unique_and_totals_exact(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
            runtime.block_on(async {
                let mut engine = hydrated_engine(Arc::new(RecordingStore::empty())).await;

                for op in &ops {
                    match op {
                        Op::Add(id, p, q) => {
                            engine.add_item(candidate(*id, period(*p), *q, dec!(12.5)));
                        }
                        Op::Update(id, p, q) => {
                            engine.update_quantity(ItemId::new(*id), period(*p), *q);
                        }
                        Op::Remove(id, p) => {
                            engine.remove_item(ItemId::new(*id), period(*p));
                        }
                    }

                    let items = engine.items();
                    for (index, item) in items.iter().enumerate() {
                        prop_assert!(item.quantity() >= 1);
                        prop_assert_eq!(
                            item.total_price(),
                            item.unit_price() * Decimal::from(item.quantity())
                        );
                        prop_assert!(items[index + 1..].iter().all(|other| other.key() != item.key()));
                    }
                }
                Ok(())
            })?;
        }
    }
}
