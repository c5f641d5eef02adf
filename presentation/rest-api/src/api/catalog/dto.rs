use poem_openapi::Object;
use rust_decimal::prelude::ToPrimitive;

use business::domain::catalog::model::{CatalogEntry, RentalRate};

#[derive(Debug, Clone, Object)]
pub struct RentalRateResponse {
    /// Billing bucket label, e.g. "3 hours"
    pub period: String,
    pub duration_hours: f64,
    /// Price of one unit for this period
    pub price: f64,
}

impl From<RentalRate> for RentalRateResponse {
    fn from(rate: RentalRate) -> Self {
        Self {
            period: rate.period.to_string(),
            duration_hours: rate.duration_hours,
            price: rate.price.to_f64().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogEntryResponse {
    pub item_id: u64,
    pub title: String,
    pub image: String,
    pub rates: Vec<RentalRateResponse>,
    /// Most units of this bike one cart may hold
    pub availability: u32,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            item_id: entry.id.value(),
            title: entry.title,
            image: entry.image,
            rates: entry.rates.into_iter().map(Into::into).collect(),
            availability: entry.availability_ceiling,
        }
    }
}
