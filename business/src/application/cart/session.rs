use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::cart::engine::CartEngine;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;

/// The cart of one shopper session, shared between request handlers.
pub type SharedCart = Arc<Mutex<CartEngine>>;

pub fn shared_cart(store: Arc<dyn CartStore>, logger: Arc<dyn Logger>) -> SharedCart {
    Arc::new(Mutex::new(CartEngine::new(store, logger)))
}

/// Hydrates a shared cart without holding its lock during the load, so
/// handlers keep working against the not-yet-ready cart in the meantime.
pub async fn hydrate_shared(cart: &SharedCart) {
    let store = {
        let engine = cart.lock().await;
        if engine.is_ready() {
            return;
        }
        engine.store()
    };

    let snapshot = store.load().await;
    cart.lock().await.complete_hydration(snapshot);
}
