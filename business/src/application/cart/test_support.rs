use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::Notify;

use crate::application::cart::session::{SharedCart, hydrate_shared, shared_cart};
use crate::domain::cart::model::{CartSnapshot, LineItem, NewLineItem};
use crate::domain::cart::store::CartStore;
use crate::domain::catalog::model::{CatalogEntry, RentalRate};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
        async fn get_by_id(&self, id: ItemId) -> Result<CatalogEntry, RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn candidate(item_id: u64, period: &str, quantity: u32, unit_price: Decimal) -> NewLineItem {
    NewLineItem {
        item_id: ItemId::new(item_id),
        rental_period: RentalPeriod::new(period),
        title: format!("Bike {}", item_id),
        image: format!("/img/bike-{}.jpg", item_id),
        quantity,
        unit_price,
        duration_hours: 24.0,
    }
}

/// A stored line priced at 100 per unit.
pub fn line(item_id: u64, period: &str, quantity: u32) -> LineItem {
    LineItem::new(candidate(item_id, period, quantity, dec!(100))).unwrap()
}

/// A bike rented at 15 per three hours or 45 per day.
pub fn bike(item_id: u64, availability_ceiling: u32) -> CatalogEntry {
    CatalogEntry {
        id: ItemId::new(item_id),
        title: format!("Bike {}", item_id),
        image: format!("/img/bike-{}.jpg", item_id),
        rates: vec![
            RentalRate {
                period: RentalPeriod::new("3 hours"),
                duration_hours: 3.0,
                price: dec!(15),
            },
            RentalRate {
                period: RentalPeriod::new("1 day"),
                duration_hours: 24.0,
                price: dec!(45),
            },
        ],
        availability_ceiling,
    }
}

/// A hydrated shared cart over an empty recording store.
pub async fn ready_cart() -> (SharedCart, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::empty());
    let cart = shared_cart(store.clone(), mock_logger());
    hydrate_shared(&cart).await;
    (cart, store)
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoadStarted,
    LoadFinished,
    /// A save of a snapshot with this many lines.
    Saved(usize),
}

/// In-memory store that records every call, optionally holding `load`
/// until the test releases it.
pub struct RecordingStore {
    stored: Mutex<CartSnapshot>,
    events: Mutex<Vec<StoreEvent>>,
    saved: Mutex<Vec<CartSnapshot>>,
    load_gate: Option<Arc<Notify>>,
}

impl RecordingStore {
    pub fn empty() -> Self {
        Self::with_snapshot(CartSnapshot::empty())
    }

    pub fn with_snapshot(snapshot: CartSnapshot) -> Self {
        Self {
            stored: Mutex::new(snapshot),
            events: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            load_gate: None,
        }
    }

    pub fn gated(snapshot: CartSnapshot, gate: Arc<Notify>) -> Self {
        Self {
            load_gate: Some(gate),
            ..Self::with_snapshot(snapshot)
        }
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn stored(&self) -> CartSnapshot {
        self.stored.lock().unwrap().clone()
    }

    pub fn saved_snapshots(&self) -> Vec<CartSnapshot> {
        self.saved.lock().unwrap().clone()
    }

    fn record(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl CartStore for RecordingStore {
    async fn load(&self) -> CartSnapshot {
        self.record(StoreEvent::LoadStarted);
        if let Some(gate) = &self.load_gate {
            gate.notified().await;
        }
        self.record(StoreEvent::LoadFinished);
        self.stored()
    }

    async fn save(&self, snapshot: &CartSnapshot) {
        self.record(StoreEvent::Saved(snapshot.len()));
        *self.stored.lock().unwrap() = snapshot.clone();
        self.saved.lock().unwrap().push(snapshot.clone());
    }
}
