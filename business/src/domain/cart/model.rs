use rust_decimal::Decimal;

use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

use super::errors::CartError;

/// Identity of a line item: two selections with the same bike and rental
/// period always collapse into one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub item_id: ItemId,
    pub rental_period: RentalPeriod,
}

impl MergeKey {
    pub fn new(item_id: ItemId, rental_period: impl Into<RentalPeriod>) -> Self {
        Self {
            item_id,
            rental_period: rental_period.into(),
        }
    }
}

impl std::fmt::Display for MergeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.item_id, self.rental_period)
    }
}

/// A selection as submitted by a caller, before it is merged into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub item_id: ItemId,
    pub rental_period: RentalPeriod,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub duration_hours: f64,
}

/// One rental selection in the cart.
///
/// `quantity` is always at least 1 and `total_price` always equals
/// `unit_price * quantity`; both are only reachable through methods that
/// keep that true.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    key: MergeKey,
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
    pub title: String,
    pub image: String,
    pub duration_hours: f64,
}

impl LineItem {
    pub fn new(candidate: NewLineItem) -> Result<Self, CartError> {
        if candidate.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let total_price = line_total(candidate.unit_price, candidate.quantity)?;

        Ok(Self {
            key: MergeKey::new(candidate.item_id, candidate.rental_period),
            quantity: candidate.quantity,
            unit_price: candidate.unit_price,
            total_price,
            title: candidate.title,
            image: candidate.image,
            duration_hours: candidate.duration_hours,
        })
    }

    /// Constructor for data already persisted in the store.
    /// The stored total is not trusted and is recomputed.
    pub fn from_repository(
        item_id: ItemId,
        rental_period: RentalPeriod,
        title: String,
        image: String,
        quantity: u32,
        unit_price: Decimal,
        duration_hours: f64,
    ) -> Result<Self, CartError> {
        Self::new(NewLineItem {
            item_id,
            rental_period,
            title,
            image,
            quantity,
            unit_price,
            duration_hours,
        })
    }

    pub fn key(&self) -> &MergeKey {
        &self.key
    }

    pub fn item_id(&self) -> ItemId {
        self.key.item_id
    }

    pub fn rental_period(&self) -> &RentalPeriod {
        &self.key.rental_period
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn matches(&self, item_id: ItemId, rental_period: &RentalPeriod) -> bool {
        self.key.item_id == item_id && &self.key.rental_period == rental_period
    }

    /// Sets a new quantity and recomputes the total. Zero, or a quantity
    /// whose total falls outside [`MAX_LINE_TOTAL`], leaves the line as it was.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.total_price = line_total(self.unit_price, quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Adds `extra` units at this line's unit price. Refused, leaving the
    /// line as it was, when the quantity or the total would go out of range.
    pub fn absorb(&mut self, extra: u32) -> Result<(), CartError> {
        let quantity = self
            .quantity
            .checked_add(extra)
            .ok_or(CartError::LineTotalOutOfRange)?;
        self.set_quantity(quantity)
    }
}

/// Largest total a single line may reach (10^18). Keeps cart sums far from
/// the `Decimal` range, so totals never overflow.
pub const MAX_LINE_TOTAL: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

fn line_total(unit_price: Decimal, quantity: u32) -> Result<Decimal, CartError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .filter(|total| total.abs() <= MAX_LINE_TOTAL)
        .ok_or(CartError::LineTotalOutOfRange)
}

/// Ordered collection of line items as it is persisted and restored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSnapshot {
    items: Vec<LineItem>,
}

impl CartSnapshot {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(LineItem::total_price).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Folds lines that share a merge key into the first occurrence,
    /// keeping its unit price. A duplicate whose units would push the line
    /// past [`MAX_LINE_TOTAL`] is dropped rather than merged.
    /// Returns how many duplicate lines were folded.
    pub fn fold_duplicates(self) -> (Self, usize) {
        let mut folded: Vec<LineItem> = Vec::with_capacity(self.items.len());
        let mut duplicates = 0;

        for item in self.items {
            match folded.iter_mut().find(|existing| existing.key == item.key) {
                Some(existing) => {
                    // Units that would push the line out of range are dropped.
                    let _ = existing.absorb(item.quantity);
                    duplicates += 1;
                }
                None => folded.push(item),
            }
        }

        (Self { items: folded }, duplicates)
    }
}
