use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::catalog::model::{CatalogEntry, RentalRate};
use business::domain::shared::value_objects::{ItemId, RentalPeriod};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRateRecord {
    pub period: RentalPeriod,
    pub duration_hours: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryRecord {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub availability: u32,
    pub rates: Vec<RentalRateRecord>,
}

impl CatalogEntryRecord {
    pub fn into_domain(self) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            title: self.title,
            image: self.image,
            rates: self
                .rates
                .into_iter()
                .map(|rate| RentalRate {
                    period: rate.period,
                    duration_hours: rate.duration_hours,
                    price: rate.price,
                })
                .collect(),
            availability_ceiling: self.availability,
        }
    }
}
