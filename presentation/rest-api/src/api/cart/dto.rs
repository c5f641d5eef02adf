use poem_openapi::{Enum, Object};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::LineItem;
use business::domain::cart::outcome::{IgnoreReason, MutationOutcome};
use business::domain::cart::use_cases::get_summary::CartSummary;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog id of the bike
    pub item_id: u64,
    /// One of the periods the bike is offered for, e.g. "1 day"
    pub rental_period: String,
    /// Units to add (must be positive)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New quantity; zero or less leaves the line untouched
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct LineItemResponse {
    pub item_id: u64,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub rental_period: String,
    pub total_price: f64,
    pub duration_hours: f64,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            item_id: item.item_id().value(),
            title: item.title.clone(),
            image: item.image.clone(),
            quantity: item.quantity(),
            unit_price: item.unit_price().to_f64().unwrap_or_default(),
            rental_period: item.rental_period().to_string(),
            total_price: item.total_price().to_f64().unwrap_or_default(),
            duration_hours: item.duration_hours,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartSummaryResponse {
    pub items: Vec<LineItemResponse>,
    pub total_amount: f64,
    /// Sum of quantities across all lines
    pub item_count: u64,
    /// False while the stored cart is still loading
    pub is_ready: bool,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            items: summary.items.iter().map(Into::into).collect(),
            total_amount: summary.total_amount.to_f64().unwrap_or_default(),
            item_count: summary.item_count,
            is_ready: summary.is_ready,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum MutationStatusDto {
    #[oai(rename = "added")]
    Added,
    #[oai(rename = "merged")]
    Merged,
    #[oai(rename = "updated")]
    Updated,
    #[oai(rename = "removed")]
    Removed,
    #[oai(rename = "cleared")]
    Cleared,
    #[oai(rename = "ignored")]
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum IgnoreReasonDto {
    #[oai(rename = "non_positive_quantity")]
    NonPositiveQuantity,
    #[oai(rename = "not_in_cart")]
    NotInCart,
    #[oai(rename = "out_of_range")]
    OutOfRange,
}

impl From<IgnoreReason> for IgnoreReasonDto {
    fn from(reason: IgnoreReason) -> Self {
        match reason {
            IgnoreReason::NonPositiveQuantity => IgnoreReasonDto::NonPositiveQuantity,
            IgnoreReason::NotInCart => IgnoreReasonDto::NotInCart,
            IgnoreReason::OutOfRange => IgnoreReasonDto::OutOfRange,
        }
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, Object)]
pub struct MutationResponse {
    pub status: MutationStatusDto,
    /// Resulting line quantity after a merge or update
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    /// Number of lines dropped by a clear
    #[oai(skip_serializing_if_is_none)]
    pub removed: Option<u64>,
    #[oai(skip_serializing_if_is_none)]
    pub reason: Option<IgnoreReasonDto>,
}

impl From<MutationOutcome> for MutationResponse {
    fn from(outcome: MutationOutcome) -> Self {
        let (status, quantity, removed, reason) = match outcome {
            MutationOutcome::Added => (MutationStatusDto::Added, None, None, None),
            MutationOutcome::Merged { quantity } => {
                (MutationStatusDto::Merged, Some(quantity), None, None)
            }
            MutationOutcome::Updated { quantity } => {
                (MutationStatusDto::Updated, Some(quantity), None, None)
            }
            MutationOutcome::Removed => (MutationStatusDto::Removed, None, None, None),
            MutationOutcome::Cleared { removed } => {
                (MutationStatusDto::Cleared, None, Some(removed as u64), None)
            }
            MutationOutcome::Ignored(reason) => {
                (MutationStatusDto::Ignored, None, None, Some(reason.into()))
            }
        };

        Self {
            status,
            quantity,
            removed,
            reason,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct QuantityResponse {
    pub item_id: u64,
    pub rental_period: String,
    /// Zero when the bike is not in the cart for this period
    pub quantity: u32,
}
