use rust_decimal::Decimal;

use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

/// Price of one unit for one billing bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRate {
    pub period: RentalPeriod,
    pub duration_hours: f64,
    pub price: Decimal,
}

/// A rentable bike as the catalog describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    pub rates: Vec<RentalRate>,
    /// Most units of this bike a single cart may hold.
    pub availability_ceiling: u32,
}

impl CatalogEntry {
    pub fn rate_for(&self, period: &RentalPeriod) -> Option<&RentalRate> {
        self.rates.iter().find(|rate| &rate.period == period)
    }

    /// Caps a requested quantity at the availability ceiling.
    /// Non-positive requests pass through untouched.
    pub fn clamp_quantity(&self, requested: i64) -> i64 {
        requested.min(i64::from(self.availability_ceiling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            id: ItemId::new(3),
            title: "Specialized Turbo Vado".to_string(),
            image: "/img/vado.jpg".to_string(),
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
            availability_ceiling: 4,
        }
    }

    #[test]
    fn should_find_rate_for_offered_period() {
        let entry = entry();

        let rate = entry.rate_for(&RentalPeriod::new("1 day"));

        assert_eq!(rate.map(|r| r.price), Some(dec!(45)));
    }

    #[test]
    fn should_return_none_for_unoffered_period() {
        assert!(entry().rate_for(&RentalPeriod::new("1 week")).is_none());
    }

    #[test]
    fn should_clamp_to_availability_ceiling() {
        let entry = entry();

        assert_eq!(entry.clamp_quantity(10), 4);
        assert_eq!(entry.clamp_quantity(2), 2);
        assert_eq!(entry.clamp_quantity(0), 0);
        assert_eq!(entry.clamp_quantity(-3), -3);
    }
}
