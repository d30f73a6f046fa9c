//! Cart data model: line items, the ordered cart, and its pure mutations.
//!
//! `Cart` is the value persisted by [`crate::store::CartStore`]. It serializes
//! transparently as a JSON array of items, which is the exact blob format the
//! storefront keeps in `localStorage`. The mutation methods here only touch
//! memory; persistence and change notification live in the store.
//!
//! Invariants upheld by every mutation and checked by [`Cart::validate`]:
//! ids are non-empty and unique, every quantity is at least one, and prices
//! and weights are finite and non-negative.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Violation of a cart invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    /// An item was given an empty id.
    #[error("cart item has an empty id")]
    EmptyId,
    /// Two items share the same id.
    #[error("duplicate cart item id: {0}")]
    DuplicateId(String),
    /// An item is present with a quantity of zero.
    #[error("cart item {0} has zero quantity")]
    ZeroQuantity(String),
    /// Price is negative, NaN, or infinite.
    #[error("cart item {id} has invalid price {price}")]
    InvalidPrice { id: String, price: f64 },
    /// Weight is negative, NaN, or infinite.
    #[error("cart item {id} has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },
}

/// A single line in the cart.
///
/// `name` and `price` are captured when the item is first added and are not
/// re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id; unique within a cart.
    pub id: String,
    /// Display name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: f64,
    /// Units in the cart, always at least one.
    pub qty: u32,
    /// Unit weight used for shipping. Older blobs omit it.
    #[serde(default)]
    pub weight: f64,
}

impl CartItem {
    /// Create a candidate item with `qty = 1` and no weight.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self { id: id.into(), name: name.into(), price, qty: 1, weight: 0.0 }
    }

    /// Set the unit weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// `price × qty`.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    /// `weight × qty`.
    #[must_use]
    pub fn line_weight(&self) -> f64 {
        self.weight * f64::from(self.qty)
    }

    /// Check the per-item invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.is_empty() {
            return Err(CartError::EmptyId);
        }
        if self.qty == 0 {
            return Err(CartError::ZeroQuantity(self.id.clone()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidPrice { id: self.id.clone(), price: self.price });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(CartError::InvalidWeight { id: self.id.clone(), weight: self.weight });
        }
        Ok(())
    }
}

/// Result of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The candidate was appended with `qty = 1`.
    Appended,
    /// An item with the same id already existed; its quantity is now `qty`.
    Incremented { qty: u32 },
}

/// Result of [`Cart::change_qty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyOutcome {
    /// No item with that id.
    Missing,
    /// The item stays with the new quantity.
    Changed { qty: u32 },
    /// The quantity dropped to zero or below and the item was removed.
    Removed,
}

/// Ordered sequence of cart items, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0_u32, |sum, item| sum.saturating_add(item.qty))
    }

    /// Add one unit of `candidate`.
    ///
    /// An existing line with the same id gains one unit and the candidate's
    /// own name, price, and quantity are ignored. Otherwise the candidate is
    /// appended with `qty = 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if a new candidate violates an item invariant. The
    /// cart is unchanged in that case.
    pub fn add(&mut self, mut candidate: CartItem) -> Result<AddOutcome, CartError> {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == candidate.id) {
            existing.qty = existing.qty.saturating_add(1);
            return Ok(AddOutcome::Incremented { qty: existing.qty });
        }
        candidate.qty = 1;
        candidate.validate()?;
        self.items.push(candidate);
        Ok(AddOutcome::Appended)
    }

    /// Adjust the quantity of `id` by `delta`, removing the line at zero or below.
    pub fn change_qty(&mut self, id: &str, delta: i64) -> QtyOutcome {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return QtyOutcome::Missing;
        };
        let next = i64::from(self.items[index].qty).saturating_add(delta);
        if next <= 0 {
            self.items.remove(index);
            return QtyOutcome::Removed;
        }
        let qty = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[index].qty = qty;
        QtyOutcome::Changed { qty }
    }

    /// Remove the line with `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Check every cart invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant in display order.
    pub fn validate(&self) -> Result<(), CartError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(CartError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
