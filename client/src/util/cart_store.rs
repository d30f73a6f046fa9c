//! Page-wide cart store bound to the browser's `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `CartStore` lives per page, on the UI thread. `connect` opens it
//! after hydration and subscribes the shared `CartState` signal, so every
//! committed write re-renders the badge, cart, and checkout views. Click
//! handlers mutate through `add_item` / `change_qty` / `remove_item` and
//! never touch the signal themselves.
//!
//! Outside the browser (SSR, native tests) the store runs on in-memory
//! storage so the same code paths stay exercised.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return `Option` instead of panicking: storage failures are
//! logged and the UI keeps its last rendered cart.

#[cfg(test)]
#[path = "cart_store_test.rs"]
mod cart_store_test;

use std::cell::RefCell;

use cart::{Cart, CartEvent, CartItem, CartStore, StorageError, StoreError};
use leptos::prelude::*;

use crate::state::cart::CartState;

#[cfg(feature = "hydrate")]
type PageStorage = cart::BrowserStorage;
#[cfg(not(feature = "hydrate"))]
type PageStorage = cart::MemoryStorage;

thread_local! {
    static STORE: RefCell<Option<CartStore<PageStorage>>> = const { RefCell::new(None) };
}

/// Result of opening the page store.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    /// The cart as persisted, or empty after recovery.
    pub cart: Cart,
    /// True if an unreadable saved cart was moved aside.
    pub recovered: bool,
}

fn open_storage() -> Result<PageStorage, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        cart::BrowserStorage::local()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(cart::MemoryStorage::new())
    }
}

/// Open the page store on `storage` and subscribe `on_change` to its writes.
///
/// Replaces any store opened earlier on this thread.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be read.
pub fn connect_with<F>(storage: PageStorage, on_change: F) -> Result<Connection, StoreError>
where
    F: FnMut(&CartEvent) + 'static,
{
    let mut store = CartStore::new(storage);
    let recovered = matches!(store.load(), Err(StoreError::Corrupt { .. } | StoreError::Invalid { .. }));
    let cart = store.cart()?;
    store.subscribe(on_change);
    STORE.with_borrow_mut(|slot| *slot = Some(store));
    log::info!("cart store connected: {} units", cart.item_count());
    Ok(Connection { cart, recovered })
}

/// Open the page store and mirror it into `state`.
pub fn connect(state: RwSignal<CartState>) {
    let connected = open_storage()
        .map_err(StoreError::from)
        .and_then(|storage| connect_with(storage, move |event| state.update(|s| s.apply(event))));
    match connected {
        Ok(Connection { cart, recovered }) => state.set(CartState::connected(cart, recovered)),
        Err(e) => {
            log::error!("cart store unavailable: {e}");
            state.set(CartState::unavailable());
        }
    }
}

/// Add one unit of `candidate`.
pub fn add_item(candidate: CartItem) -> Option<Cart> {
    let id = candidate.id.clone();
    with_store("add", &id, |store| store.add_item(candidate))
}

/// Adjust the quantity of `id` by `delta`, removing the line at zero.
pub fn change_qty(id: &str, delta: i64) -> Option<Cart> {
    with_store("change quantity of", id, |store| store.change_qty(id, delta))
}

/// Remove the line with `id`.
pub fn remove_item(id: &str) -> Option<Cart> {
    with_store("remove", id, |store| store.remove_item(id))
}

fn with_store<F>(action: &str, id: &str, op: F) -> Option<Cart>
where
    F: FnOnce(&mut CartStore<PageStorage>) -> Result<Cart, StoreError>,
{
    STORE.with_borrow_mut(|slot| {
        let Some(store) = slot.as_mut() else {
            log::warn!("cannot {action} {id:?}: cart store not connected");
            return None;
        };
        match op(store) {
            Ok(cart) => Some(cart),
            Err(e) => {
                log::error!("failed to {action} {id:?}: {e}");
                None
            }
        }
    })
}
