//! The in-memory cart: a mapping from item id to positive quantity.
//!
//! Invariant: no entry is ever stored with quantity ≤ 0 — decrementing to
//! zero removes the entry. Keys may outlive the items they refer to (e.g.
//! after a catalog reload); such stale entries are skipped wherever totals
//! or views are computed and never cause a failure.

use std::collections::BTreeMap;

use samovar_core::{ItemId, Price};

use crate::catalog::Catalog;

/// Per-session cart state. Created empty, mutated by user interaction,
/// discarded with the session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: BTreeMap<ItemId, u32>,
}

/// Totals derived from the cart against the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Total quantity across resolvable entries.
    pub total_items: u32,
    /// Sum of quantity × price over resolvable entries.
    pub total_price: Price,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of the item, creating the entry at 1 if absent.
    ///
    /// Always succeeds, even for identifiers not present in the catalog;
    /// later lookups simply skip them. Returns the new quantity.
    pub fn increment(&mut self, id: ItemId) -> u32 {
        let quantity = self.entries.entry(id).or_insert(0);
        *quantity += 1;
        *quantity
    }

    /// Remove one of the item; the entry disappears when it reaches zero.
    ///
    /// No-op for absent identifiers. Returns the remaining quantity.
    pub fn decrement(&mut self, id: &ItemId) -> u32 {
        match self.entries.get_mut(id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                *quantity
            }
            Some(_) => {
                self.entries.remove(id);
                0
            }
            None => 0,
        }
    }

    /// Current quantity for an item (0 if absent).
    #[must_use]
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.entries.iter().map(|(id, &quantity)| (id, quantity))
    }

    /// Totals against the catalog. Entries whose id does not resolve
    /// contribute nothing.
    #[must_use]
    pub fn summary(&self, catalog: &Catalog) -> CartSummary {
        let mut total_items = 0;
        let mut total_price = Price::zero(catalog.currency());
        for (id, quantity) in &self.entries {
            let Some(item) = catalog.get(id) else {
                continue;
            };
            total_items += quantity;
            total_price = total_price + item.price.times(*quantity);
        }
        CartSummary {
            total_items,
            total_price,
        }
    }
}
