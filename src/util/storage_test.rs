use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), None);
    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    storage.remove("token");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::with_entries([("token", "t1")]);
    let view = storage.clone();
    storage.set("refreshToken", "r1");
    assert!(view.contains("refreshToken"));
    assert_eq!(view.len(), 2);
}

#[test]
fn removing_missing_key_is_noop() {
    let storage = MemoryStorage::with_entries([("token", "t1")]);
    storage.remove("refreshToken");
    assert_eq!(storage.len(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_reads_empty_off_browser() {
    let storage = BrowserStorage;
    storage.set("token", "t1");
    assert_eq!(storage.get("token"), None);
}
