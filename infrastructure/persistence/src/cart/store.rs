use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartSnapshot;
use business::domain::cart::store::CartStore;
use business::domain::logger::Logger;

use super::record::LineItemRecord;
use crate::storage::medium::KeyValueStorage;

/// Keeps the cart as a JSON array of line items under a single storage key.
///
/// Never fails towards the engine: unreadable data loads as an empty cart,
/// and failed writes are logged and dropped. A stored list with any line that
/// does not decode, or whose total is out of range, is unreadable as a whole;
/// only lines with a quantity below 1 are dropped one by one.
pub struct JsonCartStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    logger: Arc<dyn Logger>,
}

impl JsonCartStore {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            storage,
            key: key.into(),
            logger,
        }
    }

    fn decode(&self, raw: &str) -> CartSnapshot {
        let values = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(values)) => values,
            Ok(_) => {
                self.logger.warn(&format!(
                    "Stored cart under '{}' is not a list, starting empty",
                    self.key
                ));
                return CartSnapshot::empty();
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Stored cart under '{}' is corrupt, starting empty: {}",
                    self.key, e
                ));
                return CartSnapshot::empty();
            }
        };

        let records = match values
            .into_iter()
            .map(serde_json::from_value::<LineItemRecord>)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(records) => records,
            Err(e) => {
                self.logger.warn(&format!(
                    "Stored cart under '{}' has a malformed line, starting empty: {}",
                    self.key, e
                ));
                return CartSnapshot::empty();
            }
        };

        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match record.into_domain() {
                Ok(item) => items.push(item),
                Err(CartError::InvalidQuantity) => self.logger.warn(&format!(
                    "Dropping stored line {} under '{}': quantity below 1",
                    index, self.key
                )),
                Err(e) => {
                    self.logger.warn(&format!(
                        "Stored cart under '{}' has an unusable line {}, starting empty: {}",
                        self.key, index, e
                    ));
                    return CartSnapshot::empty();
                }
            }
        }

        CartSnapshot::new(items)
    }
}

#[async_trait]
impl CartStore for JsonCartStore {
    async fn load(&self) -> CartSnapshot {
        match self.storage.get(&self.key).await {
            Ok(Some(raw)) => self.decode(&raw),
            Ok(None) => {
                self.logger
                    .debug(&format!("No stored cart under '{}'", self.key));
                CartSnapshot::empty()
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to read stored cart '{}': {}",
                    self.key, e
                ));
                CartSnapshot::empty()
            }
        }
    }

    async fn save(&self, snapshot: &CartSnapshot) {
        let records: Vec<LineItemRecord> = snapshot
            .items()
            .iter()
            .map(LineItemRecord::from_domain)
            .collect();

        let raw = match serde_json::to_string(&records) {
            Ok(raw) => raw,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to encode cart '{}': {}", self.key, e));
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, raw).await {
            self.logger
                .error(&format!("Failed to save cart '{}': {}", self.key, e));
        }
    }
}
