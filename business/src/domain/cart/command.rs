use crate::domain::shared::value_objects::{ItemId, RentalPeriod};

use super::errors::CartError;
use super::model::{LineItem, NewLineItem};
use super::outcome::{IgnoreReason, MutationOutcome};

/// A cart mutation as data, so it can be applied now and replayed later.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    AddItem(NewLineItem),
    UpdateQuantity {
        item_id: ItemId,
        rental_period: RentalPeriod,
        quantity: i64,
    },
    RemoveItem {
        item_id: ItemId,
        rental_period: RentalPeriod,
    },
    Clear,
}

impl CartCommand {
    /// Applies the command to `items` in place.
    pub fn apply(&self, items: &mut Vec<LineItem>) -> MutationOutcome {
        match self {
            CartCommand::AddItem(candidate) => add_item(items, candidate),
            CartCommand::UpdateQuantity {
                item_id,
                rental_period,
                quantity,
            } => update_quantity(items, *item_id, rental_period, *quantity),
            CartCommand::RemoveItem {
                item_id,
                rental_period,
            } => remove_item(items, *item_id, rental_period),
            CartCommand::Clear => {
                let removed = items.len();
                items.clear();
                MutationOutcome::Cleared { removed }
            }
        }
    }

    /// Commands whose arguments are invalid on their own, regardless of the
    /// cart contents they are applied to.
    pub fn is_rejected_outright(&self) -> bool {
        match self {
            CartCommand::AddItem(candidate) => candidate.quantity == 0,
            CartCommand::UpdateQuantity { quantity, .. } => *quantity <= 0,
            CartCommand::RemoveItem { .. } | CartCommand::Clear => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::AddItem(_) => "add_item",
            CartCommand::UpdateQuantity { .. } => "update_quantity",
            CartCommand::RemoveItem { .. } => "remove_item",
            CartCommand::Clear => "clear",
        }
    }
}

fn add_item(items: &mut Vec<LineItem>, candidate: &NewLineItem) -> MutationOutcome {
    if candidate.quantity == 0 {
        return MutationOutcome::Ignored(IgnoreReason::NonPositiveQuantity);
    }

    if let Some(existing) = items
        .iter_mut()
        .find(|item| item.matches(candidate.item_id, &candidate.rental_period))
    {
        // Price stays as captured on first add.
        return match existing.absorb(candidate.quantity) {
            Ok(()) => MutationOutcome::Merged {
                quantity: existing.quantity(),
            },
            Err(e) => MutationOutcome::Ignored(ignore_reason(&e)),
        };
    }

    match LineItem::new(candidate.clone()) {
        Ok(item) => {
            items.push(item);
            MutationOutcome::Added
        }
        Err(e) => MutationOutcome::Ignored(ignore_reason(&e)),
    }
}

fn update_quantity(
    items: &mut [LineItem],
    item_id: ItemId,
    rental_period: &RentalPeriod,
    quantity: i64,
) -> MutationOutcome {
    if quantity <= 0 {
        return MutationOutcome::Ignored(IgnoreReason::NonPositiveQuantity);
    }
    let Ok(quantity) = u32::try_from(quantity) else {
        return MutationOutcome::Ignored(IgnoreReason::OutOfRange);
    };

    set_quantity(items, item_id, rental_period, quantity)
}

fn set_quantity(
    items: &mut [LineItem],
    item_id: ItemId,
    rental_period: &RentalPeriod,
    quantity: u32,
) -> MutationOutcome {
    match items
        .iter_mut()
        .find(|item| item.matches(item_id, rental_period))
    {
        Some(item) => match item.set_quantity(quantity) {
            Ok(()) => MutationOutcome::Updated { quantity },
            Err(e) => MutationOutcome::Ignored(ignore_reason(&e)),
        },
        None => MutationOutcome::Ignored(IgnoreReason::NotInCart),
    }
}

fn ignore_reason(error: &CartError) -> IgnoreReason {
    match error {
        CartError::InvalidQuantity => IgnoreReason::NonPositiveQuantity,
        _ => IgnoreReason::OutOfRange,
    }
}

fn remove_item(
    items: &mut Vec<LineItem>,
    item_id: ItemId,
    rental_period: &RentalPeriod,
) -> MutationOutcome {
    let before = items.len();
    items.retain(|item| !item.matches(item_id, rental_period));

    if items.len() < before {
        MutationOutcome::Removed
    } else {
        MutationOutcome::Ignored(IgnoreReason::NotInCart)
    }
}
