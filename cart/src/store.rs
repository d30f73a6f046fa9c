//! Cart store: persisted cart state with change notification.
//!
//! DESIGN
//! ======
//! The cart lives as one JSON blob under a single storage key. Every
//! mutation is a synchronous read-modify-write: load the blob, apply the
//! change in memory (see [`crate::item::Cart`]), write the full cart back,
//! then notify subscribers. Views never read storage themselves; they
//! subscribe and re-render from the [`CartEvent`] they are handed.
//!
//! Storage is the single source of truth. The store keeps no cached copy,
//! so a cart written by another page load is always picked up.
//!
//! ERROR HANDLING
//! ==============
//! An absent key is an empty cart. A blob that fails to parse, or parses
//! into a cart that breaks an invariant, is reported by [`CartStore::load`].
//! [`CartStore::cart`] recovers from it: the raw blob is copied to the
//! backup key, a warning is logged, and the cart starts over empty. When a
//! mutation does the recovering, subscribers also get a
//! [`CartChange::Recovered`] event. Storage backend failures always
//! propagate.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::consts::{CART_STORAGE_KEY, CORRUPT_BACKUP_KEY};
use crate::item::{AddOutcome, Cart, CartError, CartItem, QtyOutcome};
use crate::storage::{KeyValueStore, StorageError};

/// Error returned by [`CartStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The persisted blob is not a JSON array of cart items.
    #[error("cart blob under {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The persisted blob parsed but breaks a cart invariant.
    #[error("cart blob under {key:?} is invalid: {source}")]
    Invalid {
        key: String,
        #[source]
        source: CartError,
    },
    /// A write would break a cart invariant; nothing was written.
    #[error("cart change rejected: {0}")]
    Rejected(#[from] CartError),
    /// The cart could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a committed write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added { id: String },
    /// An existing line gained one unit through an add.
    Incremented { id: String, qty: u32 },
    /// A quantity adjustment left the line with `qty` units.
    QuantityChanged { id: String, qty: u32 },
    /// A line was removed. `existed` is false when the id was not in the cart.
    Removed { id: String, existed: bool },
    /// The whole cart was replaced through [`CartStore::save`].
    Saved,
    /// A mutation found an unreadable blob and reset the cart to empty.
    /// Delivered before the mutation's own event.
    Recovered,
}

/// Delivered to every subscriber after a successful write.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEvent {
    /// The cart as persisted.
    pub cart: Cart,
    pub change: CartChange,
}

type Observer = Box<dyn FnMut(&CartEvent)>;

/// Persisted cart with subscriptions, generic over its storage backend.
pub struct CartStore<S> {
    storage: S,
    key: String,
    backup_key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a store on the default keys.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, CART_STORAGE_KEY, CORRUPT_BACKUP_KEY)
    }

    /// Open a store on custom cart and backup keys.
    #[must_use]
    pub fn with_keys(storage: S, key: impl Into<String>, backup_key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            backup_key: backup_key.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Storage key holding the cart blob.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // --- Reads ---

    /// Read the persisted cart, distinguishing absent from unreadable data.
    ///
    /// # Errors
    ///
    /// [`StoreError::Corrupt`] or [`StoreError::Invalid`] for an unreadable
    /// blob, [`StoreError::Storage`] if the backend fails.
    pub fn load(&self) -> Result<Cart, StoreError> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => parse_blob(&self.key, &raw),
            None => Ok(Cart::new()),
        }
    }

    /// Read the persisted cart, recovering from an unreadable blob.
    ///
    /// An unreadable blob is moved to the backup key and an empty cart is
    /// returned. No observers are notified; the mutations below emit
    /// [`CartChange::Recovered`] when they hit the same case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend fails.
    pub fn cart(&mut self) -> Result<Cart, StoreError> {
        self.recover().map(|(cart, _)| cart)
    }

    /// The last unreadable blob moved aside by [`CartStore::cart`], if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend fails.
    pub fn corrupt_backup(&self) -> Result<Option<String>, StoreError> {
        Ok(self.storage.get_item(&self.backup_key)?)
    }

    // --- Writes ---

    /// Persist `cart` as the new state and notify subscribers.
    ///
    /// # Errors
    ///
    /// [`StoreError::Rejected`] if `cart` breaks an invariant (nothing is
    /// written), [`StoreError::Storage`] if the write fails.
    pub fn save(&mut self, cart: Cart) -> Result<Cart, StoreError> {
        self.commit(cart, CartChange::Saved)
    }

    /// Add one unit of `candidate`, appending it if its id is new.
    ///
    /// # Errors
    ///
    /// [`StoreError::Rejected`] for an invalid new candidate, otherwise as
    /// [`CartStore::cart`] and [`CartStore::save`].
    pub fn add_item(&mut self, candidate: CartItem) -> Result<Cart, StoreError> {
        let mut cart = self.current()?;
        let id = candidate.id.clone();
        let change = match cart.add(candidate)? {
            AddOutcome::Appended => CartChange::Added { id },
            AddOutcome::Incremented { qty } => CartChange::Incremented { id, qty },
        };
        self.commit(cart, change)
    }

    /// Adjust the quantity of `id` by `delta`; at zero or below the line is
    /// removed. An unknown id returns the cart untouched without writing.
    ///
    /// # Errors
    ///
    /// As [`CartStore::cart`] and [`CartStore::save`].
    pub fn change_qty(&mut self, id: &str, delta: i64) -> Result<Cart, StoreError> {
        let mut cart = self.current()?;
        let change = match cart.change_qty(id, delta) {
            QtyOutcome::Missing => {
                log::debug!("change_qty ignored for unknown item {id:?}");
                return Ok(cart);
            }
            QtyOutcome::Changed { qty } => CartChange::QuantityChanged { id: id.to_owned(), qty },
            QtyOutcome::Removed => CartChange::Removed { id: id.to_owned(), existed: true },
        };
        self.commit(cart, change)
    }

    /// Remove the line with `id`. The cart is written back even when no line
    /// matched, so subscribers always re-render.
    ///
    /// # Errors
    ///
    /// As [`CartStore::cart`] and [`CartStore::save`].
    pub fn remove_item(&mut self, id: &str) -> Result<Cart, StoreError> {
        let mut cart = self.current()?;
        let existed = cart.remove(id);
        self.commit(cart, CartChange::Removed { id: id.to_owned(), existed })
    }

    // --- Subscriptions ---

    /// Register `observer` for every committed write, in subscription order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Read the cart, moving an unreadable blob aside. The flag is true when
    /// a blob was discarded.
    fn recover(&mut self) -> Result<(Cart, bool), StoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok((Cart::new(), false));
        };
        match parse_blob(&self.key, &raw) {
            Ok(cart) => Ok((cart, false)),
            Err(err) => {
                log::warn!("discarding unreadable cart, preserved under {:?}: {err}", self.backup_key);
                self.storage.set_item(&self.backup_key, &raw)?;
                self.storage.remove_item(&self.key)?;
                Ok((Cart::new(), true))
            }
        }
    }

    /// Starting point of a mutation. Subscribers hear about a recovery even
    /// if the mutation itself turns out to be a no-op.
    fn current(&mut self) -> Result<Cart, StoreError> {
        let (cart, recovered) = self.recover()?;
        if recovered {
            self.notify(&CartEvent { cart: cart.clone(), change: CartChange::Recovered });
        }
        Ok(cart)
    }

    fn commit(&mut self, cart: Cart, change: CartChange) -> Result<Cart, StoreError> {
        cart.validate()?;
        let raw = serde_json::to_string(&cart).map_err(StoreError::Encode)?;
        self.storage.set_item(&self.key, &raw)?;
        log::debug!("cart saved ({change:?}): {} lines, {} units", cart.len(), cart.item_count());

        let event = CartEvent { cart, change };
        self.notify(&event);
        Ok(event.cart)
    }

    fn notify(&mut self, event: &CartEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

fn parse_blob(key: &str, raw: &str) -> Result<Cart, StoreError> {
    let cart: Cart =
        serde_json::from_str(raw).map_err(|source| StoreError::Corrupt { key: key.to_owned(), source })?;
    cart.validate()
        .map_err(|source| StoreError::Invalid { key: key.to_owned(), source })?;
    Ok(cart)
}
