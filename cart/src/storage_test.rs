use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get_item("cart"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let mut storage = MemoryStorage::new();
    storage.set_item("cart", "[]").unwrap();
    assert_eq!(storage.get_item("cart"), Ok(Some("[]".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_replaces_value() {
    let mut storage = MemoryStorage::new().with_item("cart", "old");
    storage.set_item("cart", "new").unwrap();
    assert_eq!(storage.get_item("cart"), Ok(Some("new".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.remove_item("missing"), Ok(()));
}

#[test]
fn memory_storage_remove_deletes_key() {
    let mut storage = MemoryStorage::new().with_item("cart", "[]");
    storage.remove_item("cart").unwrap();
    assert_eq!(storage.get_item("cart"), Ok(None));
}

#[test]
fn backend_error_message_names_operation_and_key() {
    let err = StorageError::Backend { op: "set", key: "cart".to_owned(), message: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "storage set failed for key \"cart\": QuotaExceededError");
}
