use super::*;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("boardsmith-storage-{}", uuid::Uuid::new_v4()))
}

#[test]
fn file_storage_missing_key_is_none() {
    let storage = FileStorage::new(temp_dir());
    assert_eq!(storage.get("absent").unwrap(), None);
}

#[test]
fn file_storage_set_then_get() {
    let dir = temp_dir();
    let storage = FileStorage::new(&dir);
    storage.set("history", "[1,2,3]").unwrap();
    assert_eq!(storage.get("history").unwrap().as_deref(), Some("[1,2,3]"));
    assert!(dir.join("history.json").exists());
    assert!(!dir.join("history.json.tmp").exists());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_storage_overwrites_wholesale() {
    let dir = temp_dir();
    let storage = FileStorage::new(&dir);
    storage.set("k", "first value").unwrap();
    storage.set("k", "2").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("2"));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_storage_remove_is_idempotent() {
    let dir = temp_dir();
    let storage = FileStorage::new(&dir);
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_storage_rejects_path_like_keys() {
    let storage = FileStorage::new(temp_dir());
    assert!(matches!(storage.get("../etc/passwd"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(storage.set("", "v"), Err(StorageError::InvalidKey(_))));
}

#[test]
fn memory_storage_round_trip() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("k").unwrap(), None);
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn json_helpers_round_trip() {
    let storage = MemoryStorage::new();
    save_json(&storage, "nums", &vec![1, 2, 3]).unwrap();
    let back: Option<Vec<i32>> = load_json(&storage, "nums").unwrap();
    assert_eq!(back, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_reports_corrupt_values() {
    let storage = MemoryStorage::new();
    storage.set("nums", "not json").unwrap();
    let result: Result<Option<Vec<i32>>, _> = load_json(&storage, "nums");
    assert!(matches!(result, Err(StorageError::Serialize(_))));
}
