use crate::domain::item::{ItemId, LineItem, Quantity};
use crate::domain::totals::Totals;
use crate::error::{CartError, Result};
use std::collections::HashSet;

/// Ordered collection of line items, unique by id.
///
/// Order reflects insertion order and survives mutations; removing an item
/// never reorders the survivors. Mutations on unknown ids are idempotent
/// no-ops, reported through the `bool` return so callers can decide whether a
/// view refresh is due.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from a seed list, rejecting duplicate item ids.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(CartError::Validation(format!(
                    "duplicate item id: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity.get()).sum()
    }

    /// Updates an item's quantity, capping it at [`Quantity::MAX`].
    ///
    /// Returns `true` only when the mutation was applied. Zero quantities and
    /// unknown ids leave the cart untouched.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> bool {
        let Some(quantity) = Quantity::clamped(quantity) else {
            return false;
        };
        match self.items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes an item if present; survivors keep their relative order.
    ///
    /// Returns `false` when the id is absent, making removal idempotent.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        match self.items.iter().position(|item| item.id == *id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Derives the totals summary from the current state.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.items)
    }
}
