#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use cart::{CartChange, MemoryStorage};

use super::*;

fn tea() -> CartItem {
    CartItem::new("tea", "Masala Tea", 100.0)
}

/// Each test runs on its own thread, so each gets a fresh page store.
fn connect_recording(storage: MemoryStorage) -> (Connection, Rc<RefCell<Vec<CartChange>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let connection = connect_with(storage, move |event| sink.borrow_mut().push(event.change.clone())).unwrap();
    (connection, changes)
}

#[test]
fn mutations_before_connect_are_ignored() {
    assert!(add_item(tea()).is_none());
    assert!(change_qty("tea", 1).is_none());
    assert!(remove_item("tea").is_none());
}

#[test]
fn connect_reads_saved_cart() {
    let raw = r#"[{"id":"tea","name":"Masala Tea","price":100,"qty":3}]"#;
    let (connection, _) = connect_recording(MemoryStorage::new().with_item("cart", raw));
    assert!(!connection.recovered);
    assert_eq!(connection.cart.item_count(), 3);
}

#[test]
fn connect_flags_recovered_cart() {
    let (connection, _) = connect_recording(MemoryStorage::new().with_item("cart", "oops"));
    assert!(connection.recovered);
    assert!(connection.cart.is_empty());
}

#[test]
fn mutations_notify_subscriber() {
    let (_, changes) = connect_recording(MemoryStorage::new());

    assert_eq!(add_item(tea()).unwrap().item_count(), 1);
    assert_eq!(add_item(tea()).unwrap().item_count(), 2);
    assert_eq!(change_qty("tea", -1).unwrap().item_count(), 1);
    assert!(remove_item("tea").unwrap().is_empty());

    assert_eq!(
        *changes.borrow(),
        vec![
            CartChange::Added { id: "tea".to_owned() },
            CartChange::Incremented { id: "tea".to_owned(), qty: 2 },
            CartChange::QuantityChanged { id: "tea".to_owned(), qty: 1 },
            CartChange::Removed { id: "tea".to_owned(), existed: true },
        ]
    );
}

#[test]
fn rejected_add_returns_none() {
    connect_recording(MemoryStorage::new());
    assert!(add_item(CartItem::new("bad", "Bad", f64::INFINITY)).is_none());
}

#[test]
fn reconnect_replaces_previous_store() {
    connect_recording(MemoryStorage::new());
    add_item(tea()).unwrap();
    let (connection, _) = connect_recording(MemoryStorage::new());
    assert!(connection.cart.is_empty());
    assert_eq!(add_item(tea()).unwrap().item_count(), 1);
}
