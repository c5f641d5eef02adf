use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::LineItem;
use business::domain::shared::value_objects::{ItemId, RentalPeriod};

/// One line item as it is written to storage.
///
/// Quantity is kept signed on the way in so hand-edited or stale data with
/// zero or negative counts can be spotted and skipped.
///
/// Prices travel as JSON numbers, i.e. through `f64`. Prices with up to 15
/// significant digits restore exactly; longer ones come back rounded to the
/// nearest `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRecord {
    pub item_id: ItemId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub rental_period: RentalPeriod,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(default)]
    pub duration_hours: f64,
}

impl LineItemRecord {
    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            item_id: item.item_id(),
            title: item.title.clone(),
            image: item.image.clone(),
            quantity: i64::from(item.quantity()),
            unit_price: item.unit_price(),
            rental_period: item.rental_period().clone(),
            total_price: item.total_price(),
            duration_hours: item.duration_hours,
        }
    }

    /// The stored `totalPrice` is ignored; the domain recomputes it.
    pub fn into_domain(self) -> Result<LineItem, CartError> {
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(CartError::InvalidQuantity)?;

        LineItem::from_repository(
            self.item_id,
            self.rental_period,
            self.title,
            self.image,
            quantity,
            self.unit_price,
            self.duration_hours,
        )
    }
}
